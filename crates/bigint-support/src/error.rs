use thiserror::Error;

/// Error type for big integer digit operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigIntError {
    #[error("bigint needs {requested} digits, more than the maximum of {max}")]
    TooManyDigits { requested: usize, max: usize },
}
