//! Money module - integer minor-unit arithmetic.

mod money_errors;
mod money_model;
mod money_model_tests;

// Re-export the public interface
pub use money_errors::MoneyError;
pub use money_model::Money;
