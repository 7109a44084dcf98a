//! Plan domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::plans_errors::PlanError;
use crate::money::Money;
use crate::{Error, Result};

/// Domain model representing an investment plan.
///
/// A plan is a template: investments opened against it capture their own
/// payout and end date at open time, so later edits to the plan never
/// affect them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub min_amount: Money,
    pub return_percent: Decimal,
    pub duration_days: i32,
    pub is_active: bool,
}

/// Input model for creating a new plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub min_amount: Money,
    pub return_percent: Decimal,
    pub duration_days: i32,
    pub is_active: bool,
}

impl NewPlan {
    /// Validates the new plan data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Plan(PlanError::Invalid(
                "Plan name cannot be empty".to_string(),
            )));
        }
        if !self.min_amount.is_positive() {
            return Err(Error::Plan(PlanError::Invalid(
                "Minimum amount must be positive".to_string(),
            )));
        }
        if self.return_percent < Decimal::ZERO {
            return Err(Error::Plan(PlanError::Invalid(
                "Return percentage cannot be negative".to_string(),
            )));
        }
        if self.duration_days < 1 {
            return Err(Error::Plan(PlanError::Invalid(
                "Duration must be at least one day".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing plan. Only the provided fields are
/// applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdate {
    pub id: String,
    pub name: Option<String>,
    pub min_amount: Option<Money>,
    pub return_percent: Option<Decimal>,
    pub duration_days: Option<i32>,
    pub is_active: Option<bool>,
}

impl PlanUpdate {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.min_amount.is_some()
            || self.return_percent.is_some()
            || self.duration_days.is_some()
            || self.is_active.is_some()
    }

    /// Validates the plan update data
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Plan(PlanError::Invalid(
                "Plan ID is required for updates".to_string(),
            )));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Plan(PlanError::Invalid(
                    "Plan name cannot be empty".to_string(),
                )));
            }
        }
        if let Some(min_amount) = self.min_amount {
            if !min_amount.is_positive() {
                return Err(Error::Plan(PlanError::Invalid(
                    "Minimum amount must be positive".to_string(),
                )));
            }
        }
        if let Some(percent) = self.return_percent {
            if percent < Decimal::ZERO {
                return Err(Error::Plan(PlanError::Invalid(
                    "Return percentage cannot be negative".to_string(),
                )));
            }
        }
        if let Some(days) = self.duration_days {
            if days < 1 {
                return Err(Error::Plan(PlanError::Invalid(
                    "Duration must be at least one day".to_string(),
                )));
            }
        }
        Ok(())
    }
}
