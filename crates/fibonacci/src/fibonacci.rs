use crate::error::FibonacciError;
use crate::sequence::Sequence;

/// Largest count whose terms all fit in a `u64`.
pub const MAX_COUNT: u64 = 94;

/// Largest index accepted by [`nth`].
pub const MAX_INDEX: u64 = MAX_COUNT - 1;

/// Stateless handle over [`generate`].
///
/// Holds no fields, so a single instance can be copied or shared across
/// threads freely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceGenerator;

impl SequenceGenerator {
    pub const fn new() -> Self {
        Self
    }

    pub fn generate(&self, count: i64) -> Result<Sequence, FibonacciError> {
        generate(count)
    }
}

/// Returns the first `count` Fibonacci numbers.
///
/// Sequence: 0, 1, 1, 2, 3, 5, 8, 13, 21, ...
/// Single forward pass, O(count) time and space.
///
/// # Errors
///
/// * [`FibonacciError::InvalidArgument`] if `count` is negative
/// * [`FibonacciError::Overflow`] if `count` exceeds [`MAX_COUNT`]
///
/// Both are reported before anything is allocated.
///
/// # Examples
///
/// ```
/// use fibonacci_rs::generate;
///
/// assert!(generate(0).unwrap().is_empty());
/// assert_eq!(generate(1).unwrap(), [0]);
/// assert_eq!(generate(7).unwrap(), [0, 1, 1, 2, 3, 5, 8]);
/// assert!(generate(-1).is_err());
/// ```
pub fn generate(count: i64) -> Result<Sequence, FibonacciError> {
    if count < 0 {
        return Err(FibonacciError::InvalidArgument {
            name: "count",
            value: count,
        });
    }

    let count = count as u64;
    if count > MAX_COUNT {
        return Err(FibonacciError::Overflow {
            name: "count",
            value: count,
            max: MAX_COUNT,
        });
    }

    let len = count as usize;
    let mut terms: Vec<u64> = Vec::with_capacity(len);

    let mut a: u64 = 0;
    let mut b: u64 = 1;

    for _ in 0..len {
        terms.push(a);
        // The term after the last one pushed may not fit; it is never stored.
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }

    Ok(Sequence::from_terms(terms))
}

/// Computes the nth Fibonacci number.
///
/// Iterative, O(n) time and O(1) space.
///
/// # Arguments
///
/// * `n` - The index (0-based) of the Fibonacci number to compute
///
/// # Errors
///
/// [`FibonacciError::Overflow`] if the term does not fit in a `u64`
/// (`n` greater than [`MAX_INDEX`]).
///
/// # Examples
///
/// ```
/// use fibonacci_rs::nth;
///
/// assert_eq!(nth(0), Ok(0));
/// assert_eq!(nth(1), Ok(1));
/// assert_eq!(nth(10), Ok(55));
/// ```
pub fn nth(n: u64) -> Result<u64, FibonacciError> {
    if n < 2 {
        return Ok(n);
    }

    let mut a: u64 = 0;
    let mut b: u64 = 1;

    for _ in 2..=n {
        match a.checked_add(b) {
            Some(c) => {
                a = b;
                b = c;
            }
            None => {
                return Err(FibonacciError::Overflow {
                    name: "index",
                    value: n,
                    max: MAX_INDEX,
                })
            }
        }
    }

    Ok(b)
}
