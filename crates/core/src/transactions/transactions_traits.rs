//! Transaction repository and service traits.
//!
//! These traits define the contract for the request queue without any
//! database-specific types. The repository's approve operations fuse the
//! status transition with its ledger effect: the storage implementation
//! runs both inside one transaction, so a crash or concurrent read never
//! observes one without the other.

use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction, TransactionKind};
use crate::accounts::Caller;
use crate::errors::Result;
use crate::money::Money;

/// Trait defining the contract for transaction persistence.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Inserts a new row (pending request or completed log entry).
    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Retrieves a transaction by its ID.
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;

    /// Lists an account's transactions, newest first.
    fn list_for_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Lists all pending requests, oldest first, so the queue is worked in
    /// arrival order.
    fn list_pending(&self) -> Result<Vec<Transaction>>;

    /// Credits the wallet by the request amount and marks the pending
    /// deposit approved, atomically.
    ///
    /// Fails with `TransactionError::NotFound` when no deposit row has the
    /// given id, and `TransactionError::AlreadyResolved` when the request
    /// left the pending state before.
    async fn approve_deposit(&self, request_id: &str) -> Result<Transaction>;

    /// Re-checks the balance and debits the wallet while marking the
    /// pending withdraw approved, atomically.
    ///
    /// The balance may have dropped since the request was filed: in that
    /// case the operation fails with `WalletError::InsufficientFunds` and
    /// the request stays pending for the admin to retry or reject.
    async fn approve_withdraw(&self, request_id: &str) -> Result<Transaction>;

    /// Marks a pending request of the given kind rejected. No ledger
    /// effect.
    async fn reject(&self, request_id: &str, kind: TransactionKind) -> Result<Transaction>;
}

/// Trait defining the contract for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Files a deposit request. The wallet is untouched until approval.
    async fn request_deposit(&self, caller: &Caller, amount: Money) -> Result<Transaction>;

    /// Files a withdraw request after a balance pre-check. The wallet is
    /// untouched until approval, which re-validates the balance.
    async fn request_withdraw(&self, caller: &Caller, amount: Money) -> Result<Transaction>;

    /// The caller's transaction history, newest first.
    fn list_transactions(&self, caller: &Caller) -> Result<Vec<Transaction>>;

    /// All pending requests, oldest first. Admin only.
    fn list_pending(&self, caller: &Caller) -> Result<Vec<Transaction>>;

    /// Approves a pending deposit, crediting the wallet. Admin only.
    async fn approve_deposit(&self, caller: &Caller, request_id: &str) -> Result<Transaction>;

    /// Rejects a pending deposit. Admin only.
    async fn reject_deposit(&self, caller: &Caller, request_id: &str) -> Result<Transaction>;

    /// Approves a pending withdraw, debiting the wallet. Admin only.
    async fn approve_withdraw(&self, caller: &Caller, request_id: &str) -> Result<Transaction>;

    /// Rejects a pending withdraw. Admin only.
    async fn reject_withdraw(&self, caller: &Caller, request_id: &str) -> Result<Transaction>;
}
