//! Investment domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::investments_constants::*;
use super::investments_errors::InvestmentError;
use crate::money::Money;

/// Lifecycle state of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    Active,
    Completed,
}

impl InvestmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Active => INVESTMENT_STATUS_ACTIVE,
            InvestmentStatus::Completed => INVESTMENT_STATUS_COMPLETED,
        }
    }
}

impl FromStr for InvestmentStatus {
    type Err = InvestmentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == INVESTMENT_STATUS_ACTIVE => Ok(InvestmentStatus::Active),
            s if s == INVESTMENT_STATUS_COMPLETED => Ok(InvestmentStatus::Completed),
            _ => Err(InvestmentError::UnknownStatus(s.to_string())),
        }
    }
}

/// Domain model representing a fixed-term investment.
///
/// Payout and end date are computed once, when the investment is opened,
/// and frozen. A claim pays out the stored value; plan edits and repeated
/// reads can never make it drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub account_id: String,
    pub plan_id: String,
    pub amount: Money,
    pub payout: Money,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: InvestmentStatus,
}

impl Investment {
    /// Maturity is a derived, read-time predicate. The boundary is
    /// inclusive: an investment is claimable at exactly `end_at`.
    pub fn is_matured(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_at
    }

    pub fn is_active(&self) -> bool {
        self.status == InvestmentStatus::Active
    }
}

/// Input model for opening an investment. Payout and end date are already
/// frozen by the service before this reaches storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub plan_id: String,
    pub amount: Money,
    pub payout: Money,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

/// An investment joined with the plan fields a listing needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentWithPlan {
    pub investment: Investment,
    pub plan_name: String,
    pub return_percent: Decimal,
    pub duration_days: i32,
}

impl InvestmentWithPlan {
    /// Builds the listing row, deriving `matured` from the given reading
    /// of the clock.
    pub fn into_view(self, now: DateTime<Utc>) -> InvestmentView {
        let matured = self.investment.is_matured(now);
        InvestmentView {
            id: self.investment.id,
            plan_id: self.investment.plan_id,
            plan_name: self.plan_name,
            return_percent: self.return_percent,
            duration_days: self.duration_days,
            amount: self.investment.amount,
            payout: self.investment.payout,
            start_at: self.investment.start_at,
            end_at: self.investment.end_at,
            status: self.investment.status,
            matured,
        }
    }
}

/// Listing row returned to the caller: investment, plan info, and the
/// derived maturity flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentView {
    pub id: String,
    pub plan_id: String,
    pub plan_name: String,
    pub return_percent: Decimal,
    pub duration_days: i32,
    pub amount: Money,
    pub payout: Money,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: InvestmentStatus,
    pub matured: bool,
}
