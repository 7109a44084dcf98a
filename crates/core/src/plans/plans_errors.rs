use thiserror::Error;

/// Custom error type for plan catalog operations
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Plan {0} not found")]
    NotFound(String),

    #[error("Plan {0} is not active")]
    Inactive(String),

    #[error("Invalid plan: {0}")]
    Invalid(String),
}
