use thiserror::Error;

/// Custom error type for transaction-request operations
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Transaction request {0} not found")]
    NotFound(String),

    #[error("Transaction request {0} was already resolved")]
    AlreadyResolved(String),

    #[error("Unknown transaction kind: {0}")]
    UnknownKind(String),

    #[error("Unknown transaction status: {0}")]
    UnknownStatus(String),
}
