//! SQLite storage implementation for the wallet ledger.

mod model;
mod repository;

pub use model::WalletDB;
pub use repository::WalletRepository;

pub(crate) use repository::{credit_wallet, debit_wallet, insert_wallet};
