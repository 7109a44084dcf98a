//! SQLite storage implementation for the transaction request queue.

mod model;
mod repository;

pub use model::{NewTransactionDB, TransactionDB};
pub use repository::TransactionRepository;

pub(crate) use repository::insert_transaction;
