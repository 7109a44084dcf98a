use thiserror::Error;

use crate::money::Money;

/// Custom error type for investment lifecycle operations
#[derive(Debug, Error)]
pub enum InvestmentError {
    #[error("Investment {0} not found")]
    NotFound(String),

    #[error("Investment {0} was already claimed")]
    AlreadyClaimed(String),

    #[error("Investment {0} has not matured yet")]
    NotMatured(String),

    #[error("Amount {amount} is below the plan minimum {minimum}")]
    BelowMinimum { amount: Money, minimum: Money },

    #[error("Unknown investment status: {0}")]
    UnknownStatus(String),
}
