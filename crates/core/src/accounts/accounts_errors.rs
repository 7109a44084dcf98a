use thiserror::Error;

/// Custom error type for account-related operations
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Account name '{0}' is already taken")]
    Duplicate(String),

    #[error("Account {0} not found")]
    NotFound(String),
}
