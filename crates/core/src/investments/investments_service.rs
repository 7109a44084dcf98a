use chrono::Duration;
use log::debug;
use std::sync::Arc;

use super::investments_model::{Investment, InvestmentView, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::accounts::Caller;
use crate::clock::Clock;
use crate::errors::Result;
use crate::investments::InvestmentError;
use crate::money::{Money, MoneyError};
use crate::plans::{PlanError, PlanRepositoryTrait};

/// Service driving the investment lifecycle: open, list with derived
/// maturity, claim.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
    plans: Arc<dyn PlanRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl InvestmentService {
    /// Creates a new InvestmentService instance
    pub fn new(
        repository: Arc<dyn InvestmentRepositoryTrait>,
        plans: Arc<dyn PlanRepositoryTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            plans,
            clock,
        }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    async fn open_investment(
        &self,
        caller: &Caller,
        plan_id: &str,
        amount: Money,
    ) -> Result<Investment> {
        if !amount.is_positive() {
            return Err(MoneyError::InvalidAmount.into());
        }

        let plan = self.plans.get_by_id(plan_id)?;
        if !plan.is_active {
            return Err(PlanError::Inactive(plan.id).into());
        }
        if amount < plan.min_amount {
            return Err(InvestmentError::BelowMinimum {
                amount,
                minimum: plan.min_amount,
            }
            .into());
        }

        // Payout and end date are frozen here; a claim pays out the stored
        // value, never a recomputation.
        let payout = amount.with_return_percent(plan.return_percent)?;
        let start_at = self.clock.now();
        let end_at = start_at + Duration::days(i64::from(plan.duration_days));

        debug!(
            "Opening investment for account {}: plan {}, principal {}, payout {}, matures {}",
            caller.account_id, plan.id, amount, payout, end_at
        );

        let new_investment = NewInvestment {
            id: None,
            account_id: caller.account_id.clone(),
            plan_id: plan.id,
            amount,
            payout,
            start_at,
            end_at,
        };
        self.repository.open(new_investment).await
    }

    fn list_investments(&self, caller: &Caller) -> Result<Vec<InvestmentView>> {
        // One clock reading for the whole listing, so equal end timestamps
        // present identically within one request.
        let now = self.clock.now();
        let rows = self.repository.list_for_account(&caller.account_id)?;
        Ok(rows.into_iter().map(|row| row.into_view(now)).collect())
    }

    async fn claim_investment(&self, caller: &Caller, investment_id: &str) -> Result<Investment> {
        let now = self.clock.now();
        let investment = self
            .repository
            .get_for_account(investment_id, &caller.account_id)?;
        if !investment.is_active() {
            return Err(InvestmentError::AlreadyClaimed(investment.id).into());
        }
        if !investment.is_matured(now) {
            return Err(InvestmentError::NotMatured(investment.id).into());
        }

        debug!(
            "Claiming investment {} for account {}: payout {}",
            investment_id, caller.account_id, investment.payout
        );

        // The repository re-checks the preconditions inside the atomic
        // claim; the conditional status write is what makes the payout
        // happen at most once.
        self.repository
            .claim(investment_id, &caller.account_id, now)
            .await
    }
}
