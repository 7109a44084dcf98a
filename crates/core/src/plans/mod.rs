//! Plans module - the read-mostly investment plan catalog.

mod plans_errors;
mod plans_model;
mod plans_service;
mod plans_traits;

// Re-export the public interface
pub use plans_errors::PlanError;
pub use plans_model::{NewPlan, Plan, PlanUpdate};
pub use plans_service::PlanService;
pub use plans_traits::{PlanRepositoryTrait, PlanServiceTrait};
