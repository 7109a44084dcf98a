//! Wallets module - the ledger that owns every balance.

mod wallets_errors;
mod wallets_model;
mod wallets_service;
mod wallets_traits;

// Re-export the public interface
pub use wallets_errors::WalletError;
pub use wallets_model::Wallet;
pub use wallets_service::WalletService;
pub use wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
