//! Investment repository and service traits.
//!
//! The repository's open and claim operations are compound atomic units:
//! the storage implementation runs the ledger effect, the investment row
//! change, and the audit log append inside one transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::investments_model::{Investment, InvestmentView, InvestmentWithPlan, NewInvestment};
use crate::accounts::Caller;
use crate::errors::Result;
use crate::money::Money;

/// Trait defining the contract for investment persistence.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Debits the principal, creates the active investment, and appends a
    /// completed investment log row as one atomic unit.
    ///
    /// A failed debit (`WalletError::InsufficientFunds`) creates nothing.
    async fn open(&self, new_investment: NewInvestment) -> Result<Investment>;

    /// Claims a matured investment as one atomic unit: re-checks maturity
    /// against `now`, transitions active -> completed with a conditional
    /// write, credits the frozen payout, and appends a payout log row.
    ///
    /// Fails with `InvestmentError::NotFound` when the investment does not
    /// exist or belongs to another account, `AlreadyClaimed` when it is no
    /// longer active, and `NotMatured` before the end timestamp.
    async fn claim(
        &self,
        investment_id: &str,
        account_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Investment>;

    /// Retrieves an investment owned by the given account.
    fn get_for_account(&self, investment_id: &str, account_id: &str) -> Result<Investment>;

    /// Lists an account's investments joined with plan info, newest first.
    fn list_for_account(&self, account_id: &str) -> Result<Vec<InvestmentWithPlan>>;
}

/// Trait defining the contract for investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    /// Opens an investment against an active plan, locking the principal
    /// and freezing the payout and end date.
    async fn open_investment(
        &self,
        caller: &Caller,
        plan_id: &str,
        amount: Money,
    ) -> Result<Investment>;

    /// The caller's investments with the derived maturity flag, computed
    /// from a single clock reading for the whole listing.
    fn list_investments(&self, caller: &Caller) -> Result<Vec<InvestmentView>>;

    /// Claims a matured investment, crediting its frozen payout.
    async fn claim_investment(&self, caller: &Caller, investment_id: &str) -> Result<Investment>;
}
