//! Database models for plans.

use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use coffer_core::money::Money;
use coffer_core::plans::{NewPlan, Plan, PlanUpdate};

/// Database model for plans. The return percentage is stored as a decimal
/// string so no precision is lost to floating point.
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
#[diesel(table_name = crate::schema::plans)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlanDB {
    pub id: String,
    pub name: String,
    pub min_amount: i64,
    pub return_percent: String,
    pub duration_days: i32,
    pub is_active: bool,
}

/// Database model for partial plan updates; only the provided fields are
/// written.
#[derive(AsChangeset, Serialize, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::plans)]
pub struct PlanChangesetDB {
    pub name: Option<String>,
    pub min_amount: Option<i64>,
    pub return_percent: Option<String>,
    pub duration_days: Option<i32>,
    pub is_active: Option<bool>,
}

/// Database model for creating a new plan
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::plans)]
pub struct NewPlanDB {
    pub id: Option<String>,
    pub name: String,
    pub min_amount: i64,
    pub return_percent: String,
    pub duration_days: i32,
    pub is_active: bool,
}

impl TryFrom<PlanDB> for Plan {
    type Error = coffer_core::Error;

    fn try_from(db: PlanDB) -> coffer_core::Result<Self> {
        Ok(Self {
            id: db.id,
            name: db.name,
            min_amount: Money::from_minor(db.min_amount),
            return_percent: Decimal::from_str(&db.return_percent)?,
            duration_days: db.duration_days,
            is_active: db.is_active,
        })
    }
}

impl From<NewPlan> for NewPlanDB {
    fn from(domain: NewPlan) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            min_amount: domain.min_amount.minor(),
            return_percent: domain.return_percent.to_string(),
            duration_days: domain.duration_days,
            is_active: domain.is_active,
        }
    }
}

impl From<PlanUpdate> for PlanChangesetDB {
    fn from(domain: PlanUpdate) -> Self {
        Self {
            name: domain.name,
            min_amount: domain.min_amount.map(|m| m.minor()),
            return_percent: domain.return_percent.map(|p| p.to_string()),
            duration_days: domain.duration_days,
            is_active: domain.is_active,
        }
    }
}
