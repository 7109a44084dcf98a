//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountWithBalance, Caller, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates the account and its zero-balance wallet in one transaction.
    ///
    /// Fails with `AccountError::Duplicate` when the name is taken.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts joined with their wallet balances, oldest first.
    fn list_with_balances(&self) -> Result<Vec<AccountWithBalance>>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with business validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    /// Lists all accounts with balances. Admin only.
    fn list_accounts(&self, caller: &Caller) -> Result<Vec<AccountWithBalance>>;
}
