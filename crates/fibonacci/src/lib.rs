//! Fibonacci sequence generation.
//!
//! The crate is pure: no I/O, no logging, no shared state. Every call
//! validates its input before allocating and returns a fresh, read-only
//! [`Sequence`].

pub mod error;
pub mod fibonacci;
pub mod sequence;

pub use error::FibonacciError;
pub use fibonacci::{generate, nth, SequenceGenerator, MAX_COUNT, MAX_INDEX};
pub use sequence::Sequence;
