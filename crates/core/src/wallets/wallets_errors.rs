use thiserror::Error;

use crate::money::Money;

/// Custom error type for ledger operations
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Insufficient funds: balance {balance} cannot cover {requested}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("Wallet not found for account {0}")]
    NotFound(String),
}
