use log::debug;
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction, TransactionKind};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::accounts::Caller;
use crate::errors::Result;
use crate::money::{Money, MoneyError};
use crate::wallets::{WalletError, WalletRepositoryTrait};

/// Service for the deposit/withdraw request queue.
///
/// Requests are inert records; approval is the single point where money
/// moves, which lets an admin reject stale or fraudulent requests without
/// any compensating transaction.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    wallets: Arc<dyn WalletRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        wallets: Arc<dyn WalletRepositoryTrait>,
    ) -> Self {
        Self { repository, wallets }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn request_deposit(&self, caller: &Caller, amount: Money) -> Result<Transaction> {
        if !amount.is_positive() {
            return Err(MoneyError::InvalidAmount.into());
        }

        debug!(
            "Filing deposit request for account {}: {} minor units",
            caller.account_id, amount
        );

        let meta = serde_json::json!({ "note": "Deposit requires admin approval" }).to_string();
        let new_transaction =
            NewTransaction::pending_deposit(&caller.account_id, amount, Some(meta));
        new_transaction.validate()?;
        self.repository.insert(new_transaction).await
    }

    async fn request_withdraw(&self, caller: &Caller, amount: Money) -> Result<Transaction> {
        if !amount.is_positive() {
            return Err(MoneyError::InvalidAmount.into());
        }

        // Pre-check only: the balance may change before approval, which
        // re-validates it inside the debit.
        let wallet = self.wallets.get_by_account(&caller.account_id)?;
        if !wallet.can_cover(amount) {
            return Err(WalletError::InsufficientFunds {
                balance: wallet.balance,
                requested: amount,
            }
            .into());
        }

        debug!(
            "Filing withdraw request for account {}: {} minor units",
            caller.account_id, amount
        );

        let meta = serde_json::json!({ "note": "Withdraw requires admin approval" }).to_string();
        let new_transaction =
            NewTransaction::pending_withdraw(&caller.account_id, amount, Some(meta));
        new_transaction.validate()?;
        self.repository.insert(new_transaction).await
    }

    fn list_transactions(&self, caller: &Caller) -> Result<Vec<Transaction>> {
        self.repository.list_for_account(&caller.account_id)
    }

    fn list_pending(&self, caller: &Caller) -> Result<Vec<Transaction>> {
        caller.require_admin()?;
        self.repository.list_pending()
    }

    async fn approve_deposit(&self, caller: &Caller, request_id: &str) -> Result<Transaction> {
        caller.require_admin()?;
        debug!("Approving deposit request {}", request_id);
        self.repository.approve_deposit(request_id).await
    }

    async fn reject_deposit(&self, caller: &Caller, request_id: &str) -> Result<Transaction> {
        caller.require_admin()?;
        debug!("Rejecting deposit request {}", request_id);
        self.repository
            .reject(request_id, TransactionKind::Deposit)
            .await
    }

    async fn approve_withdraw(&self, caller: &Caller, request_id: &str) -> Result<Transaction> {
        caller.require_admin()?;
        debug!("Approving withdraw request {}", request_id);
        self.repository.approve_withdraw(request_id).await
    }

    async fn reject_withdraw(&self, caller: &Caller, request_id: &str) -> Result<Transaction> {
        caller.require_admin()?;
        debug!("Rejecting withdraw request {}", request_id);
        self.repository
            .reject(request_id, TransactionKind::Withdraw)
            .await
    }
}
