//! Database models for investments.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use coffer_core::investments::{Investment, InvestmentStatus, InvestmentWithPlan, NewInvestment};
use coffer_core::money::Money;

use crate::plans::PlanDB;

/// Database model for investments
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InvestmentDB {
    pub id: String,
    pub account_id: String,
    pub plan_id: String,
    pub amount: i64,
    pub payout: i64,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: String,
}

/// Database model for opening an investment. All values are frozen by the
/// core service before they reach storage.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
pub struct NewInvestmentDB {
    pub id: Option<String>,
    pub account_id: String,
    pub plan_id: String,
    pub amount: i64,
    pub payout: i64,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: String,
}

impl TryFrom<InvestmentDB> for Investment {
    type Error = coffer_core::Error;

    fn try_from(db: InvestmentDB) -> coffer_core::Result<Self> {
        Ok(Self {
            id: db.id,
            account_id: db.account_id,
            plan_id: db.plan_id,
            amount: Money::from_minor(db.amount),
            payout: Money::from_minor(db.payout),
            start_at: Utc.from_utc_datetime(&db.start_at),
            end_at: Utc.from_utc_datetime(&db.end_at),
            status: InvestmentStatus::from_str(&db.status)?,
        })
    }
}

impl From<NewInvestment> for NewInvestmentDB {
    fn from(domain: NewInvestment) -> Self {
        Self {
            id: domain.id,
            account_id: domain.account_id,
            plan_id: domain.plan_id,
            amount: domain.amount.minor(),
            payout: domain.payout.minor(),
            start_at: domain.start_at.naive_utc(),
            end_at: domain.end_at.naive_utc(),
            status: InvestmentStatus::Active.as_str().to_string(),
        }
    }
}

/// Builds the joined listing row from an investment and its plan.
pub(crate) fn investment_with_plan(
    investment: InvestmentDB,
    plan: PlanDB,
) -> coffer_core::Result<InvestmentWithPlan> {
    Ok(InvestmentWithPlan {
        investment: investment.try_into()?,
        plan_name: plan.name,
        return_percent: Decimal::from_str(&plan.return_percent)?,
        duration_days: plan.duration_days,
    })
}
