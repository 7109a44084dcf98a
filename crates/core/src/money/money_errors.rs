use thiserror::Error;

/// Custom error type for money arithmetic and boundary conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount must be a positive value")]
    InvalidAmount,

    #[error("Amount is outside the representable range")]
    OutOfRange,
}
