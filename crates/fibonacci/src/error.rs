use thiserror::Error;

/// Errors returned by the sequence functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("invalid argument `{name}`: must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("argument `{name}` out of range: {value} exceeds maximum of {max} for u64 terms")]
    Overflow {
        name: &'static str,
        value: u64,
        max: u64,
    },
}

impl FibonacciError {
    /// Name of the parameter that was rejected.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } | Self::Overflow { name, .. } => name,
        }
    }
}
