//! SQLite storage implementation for the plan catalog.

mod model;
mod repository;

pub use model::{NewPlanDB, PlanChangesetDB, PlanDB};
pub use repository::PlanRepository;
