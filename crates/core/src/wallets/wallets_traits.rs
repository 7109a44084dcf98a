//! Wallet ledger repository and service traits.

use async_trait::async_trait;

use super::wallets_model::Wallet;
use crate::accounts::Caller;
use crate::errors::Result;
use crate::money::Money;

/// Trait defining the contract for the wallet ledger.
///
/// Both mutations execute as a single serializable unit against the
/// account's wallet row; a read-balance-then-write-balance sequence never
/// interleaves with another unit on the same account.
#[async_trait]
pub trait WalletRepositoryTrait: Send + Sync {
    /// Retrieves the wallet for an account.
    fn get_by_account(&self, account_id: &str) -> Result<Wallet>;

    /// Increases the balance by `amount`. Always succeeds for an existing
    /// wallet.
    async fn credit(&self, account_id: &str, amount: Money) -> Result<Wallet>;

    /// Decreases the balance by `amount` as a single conditional write.
    ///
    /// Fails with `WalletError::InsufficientFunds` when the balance cannot
    /// cover the amount; the balance is never driven negative.
    async fn debit(&self, account_id: &str, amount: Money) -> Result<Wallet>;
}

/// Trait defining the contract for wallet service operations.
pub trait WalletServiceTrait: Send + Sync {
    /// The caller's own wallet.
    fn get_wallet(&self, caller: &Caller) -> Result<Wallet>;
}
