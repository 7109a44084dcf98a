//! Investments module - the fixed-term investment lifecycle.

mod investments_constants;
mod investments_errors;
mod investments_model;
mod investments_service;
mod investments_traits;

// Re-export the public interface
pub use investments_constants::*;
pub use investments_errors::InvestmentError;
pub use investments_model::{
    Investment, InvestmentStatus, InvestmentView, InvestmentWithPlan, NewInvestment,
};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
