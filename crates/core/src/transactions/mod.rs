//! Transactions module - the pending-request queue and money-movement log.

mod transactions_constants;
mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

// Re-export the public interface
pub use transactions_constants::*;
pub use transactions_errors::TransactionError;
pub use transactions_model::{NewTransaction, Transaction, TransactionKind, TransactionStatus};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
