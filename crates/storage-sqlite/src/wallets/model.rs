//! Database models for wallets.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use coffer_core::money::Money;
use coffer_core::wallets::Wallet;

/// Database model for wallets
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
#[diesel(table_name = crate::schema::wallets)]
#[diesel(primary_key(account_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WalletDB {
    pub account_id: String,
    pub balance: i64,
    pub updated_at: NaiveDateTime,
}

impl From<WalletDB> for Wallet {
    fn from(db: WalletDB) -> Self {
        Self {
            account_id: db.account_id,
            balance: Money::from_minor(db.balance),
            updated_at: Utc.from_utc_datetime(&db.updated_at),
        }
    }
}
