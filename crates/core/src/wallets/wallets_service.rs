use std::sync::Arc;

use super::wallets_model::Wallet;
use super::wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
use crate::accounts::Caller;
use crate::errors::Result;

/// Service exposing read access to wallets.
///
/// Money only moves through request approval, investment open, and claim;
/// there is deliberately no caller-facing credit or debit here.
pub struct WalletService {
    repository: Arc<dyn WalletRepositoryTrait>,
}

impl WalletService {
    /// Creates a new WalletService instance
    pub fn new(repository: Arc<dyn WalletRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl WalletServiceTrait for WalletService {
    fn get_wallet(&self, caller: &Caller) -> Result<Wallet> {
        self.repository.get_by_account(&caller.account_id)
    }
}
