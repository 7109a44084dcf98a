//! Database models for accounts.

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use coffer_core::accounts::{Account, AccountWithBalance, NewAccount};
use coffer_core::money::Money;

/// Database model for accounts
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
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            is_admin: db.is_admin,
            created_at: Utc.from_utc_datetime(&db.created_at),
        }
    }
}

impl From<NewAccount> for AccountDB {
    fn from(domain: NewAccount) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            is_admin: domain.is_admin,
            created_at: Utc::now().naive_utc(),
        }
    }
}

/// Builds the admin listing row from an account joined with its wallet
/// balance.
pub(crate) fn account_with_balance(db: AccountDB, balance: i64) -> AccountWithBalance {
    AccountWithBalance {
        id: db.id,
        name: db.name,
        is_admin: db.is_admin,
        created_at: Utc.from_utc_datetime(&db.created_at),
        balance: Money::from_minor(balance),
    }
}
