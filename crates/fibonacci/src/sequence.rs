//! Read-only container for generated terms.

use std::fmt;
use std::ops::Deref;

/// An immutable, ordered run of Fibonacci terms.
///
/// Only shared access is exposed. Use [`Sequence::to_vec`] for an owned,
/// mutable copy; the sequence itself is never changed.
///
/// Terms cannot be overwritten:
///
/// ```compile_fail
/// let mut seq = fibonacci_rs::generate(3).unwrap();
/// seq[0] = 1;
/// ```
///
/// or appended:
///
/// ```compile_fail
/// let mut seq = fibonacci_rs::generate(3).unwrap();
/// seq.push(1);
/// ```
///
/// and no mutable slice can be borrowed:
///
/// ```compile_fail
/// let mut seq = fibonacci_rs::generate(3).unwrap();
/// let s: &mut [u64] = &mut seq;
/// s[0] = 1;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence {
    terms: Box<[u64]>,
}

impl Sequence {
    pub(crate) fn from_terms(terms: Vec<u64>) -> Self {
        Self {
            terms: terms.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.terms
    }

    /// Copies the terms into a new `Vec`.
    pub fn to_vec(&self) -> Vec<u64> {
        self.terms.to_vec()
    }
}

impl Deref for Sequence {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.terms
    }
}

impl AsRef<[u64]> for Sequence {
    fn as_ref(&self) -> &[u64] {
        &self.terms
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl PartialEq<[u64]> for Sequence {
    fn eq(&self, other: &[u64]) -> bool {
        *self.terms == *other
    }
}

impl<const N: usize> PartialEq<[u64; N]> for Sequence {
    fn eq(&self, other: &[u64; N]) -> bool {
        *self.terms == other[..]
    }
}

/// Terms joined by `", "`.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
