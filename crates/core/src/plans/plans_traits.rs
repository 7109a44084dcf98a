//! Plan repository and service traits.

use async_trait::async_trait;

use super::plans_model::{NewPlan, Plan, PlanUpdate};
use crate::accounts::Caller;
use crate::errors::Result;

/// Trait defining the contract for plan catalog persistence.
#[async_trait]
pub trait PlanRepositoryTrait: Send + Sync {
    /// Retrieves a plan by its ID, active or not.
    fn get_by_id(&self, plan_id: &str) -> Result<Plan>;

    /// Lists plans with `is_active = true`.
    fn list_active(&self) -> Result<Vec<Plan>>;

    /// Inserts a new plan.
    async fn insert(&self, new_plan: NewPlan) -> Result<Plan>;

    /// Applies only the provided fields. Historical investments are
    /// unaffected: they captured payout and end date when they opened.
    async fn update(&self, plan_update: PlanUpdate) -> Result<Plan>;
}

/// Trait defining the contract for plan service operations.
#[async_trait]
pub trait PlanServiceTrait: Send + Sync {
    /// The plans currently open for investment.
    fn list_plans(&self) -> Result<Vec<Plan>>;

    /// Creates a plan. Admin only.
    async fn create_plan(&self, caller: &Caller, new_plan: NewPlan) -> Result<Plan>;

    /// Edits a plan's non-committed fields. Admin only.
    async fn update_plan(&self, caller: &Caller, plan_update: PlanUpdate) -> Result<Plan>;
}
