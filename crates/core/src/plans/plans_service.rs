use log::debug;
use std::sync::Arc;

use super::plans_model::{NewPlan, Plan, PlanUpdate};
use super::plans_traits::{PlanRepositoryTrait, PlanServiceTrait};
use crate::accounts::Caller;
use crate::errors::Result;

/// Service for managing the plan catalog
pub struct PlanService {
    repository: Arc<dyn PlanRepositoryTrait>,
}

impl PlanService {
    /// Creates a new PlanService instance
    pub fn new(repository: Arc<dyn PlanRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PlanServiceTrait for PlanService {
    fn list_plans(&self) -> Result<Vec<Plan>> {
        self.repository.list_active()
    }

    async fn create_plan(&self, caller: &Caller, new_plan: NewPlan) -> Result<Plan> {
        caller.require_admin()?;
        new_plan.validate()?;
        debug!("Creating plan '{}'", new_plan.name);
        self.repository.insert(new_plan).await
    }

    async fn update_plan(&self, caller: &Caller, plan_update: PlanUpdate) -> Result<Plan> {
        caller.require_admin()?;
        plan_update.validate()?;
        debug!("Updating plan {}", plan_update.id);
        self.repository.update(plan_update).await
    }
}
