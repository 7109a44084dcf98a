//! Database models for transactions.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use coffer_core::money::Money;
use coffer_core::transactions::{NewTransaction, Transaction, TransactionKind, TransactionStatus};

/// Database model for transactions
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
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub account_id: String,
    pub kind: String,
    pub amount: i64,
    pub status: String,
    pub meta: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a new transaction. The timestamp is set
/// here with full precision so listings order stably even within one
/// second.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransactionDB {
    pub id: Option<String>,
    pub account_id: String,
    pub kind: String,
    pub amount: i64,
    pub status: String,
    pub meta: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = coffer_core::Error;

    fn try_from(db: TransactionDB) -> coffer_core::Result<Self> {
        Ok(Self {
            id: db.id,
            account_id: db.account_id,
            kind: TransactionKind::from_str(&db.kind)?,
            amount: Money::from_minor(db.amount),
            status: TransactionStatus::from_str(&db.status)?,
            meta: db.meta,
            created_at: Utc.from_utc_datetime(&db.created_at),
        })
    }
}

impl From<NewTransaction> for NewTransactionDB {
    fn from(domain: NewTransaction) -> Self {
        Self {
            id: domain.id,
            account_id: domain.account_id,
            kind: domain.kind.as_str().to_string(),
            amount: domain.amount.minor(),
            status: domain.status.as_str().to_string(),
            meta: domain.meta,
            created_at: Utc::now().naive_utc(),
        }
    }
}
