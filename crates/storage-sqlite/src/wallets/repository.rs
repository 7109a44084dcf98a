use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use coffer_core::money::Money;
use coffer_core::wallets::{Wallet, WalletError, WalletRepositoryTrait};
use coffer_core::Result;

use super::model::WalletDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::wallets;

/// Repository for the wallet ledger.
///
/// Credit and debit are the only two mutations; both run on the writer
/// actor so they serialize against every other unit touching the same
/// wallet. The free functions below are shared with the transaction and
/// investment repositories, which fuse a ledger effect into their own
/// writer jobs.
pub struct WalletRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl WalletRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        WalletRepository { pool, writer }
    }

    fn get_by_account_impl(&self, account: &str) -> Result<Wallet> {
        let mut conn = get_connection(&self.pool)?;
        let row = wallets::table
            .find(account)
            .first::<WalletDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| WalletError::NotFound(account.to_string()))?;
        Ok(row.into())
    }
}

#[async_trait]
impl WalletRepositoryTrait for WalletRepository {
    fn get_by_account(&self, account_id: &str) -> Result<Wallet> {
        self.get_by_account_impl(account_id)
    }

    async fn credit(&self, account_id: &str, amount: Money) -> Result<Wallet> {
        let account = account_id.to_string();
        self.writer
            .exec(move |conn| credit_wallet(conn, &account, amount.minor()).map(Wallet::from))
            .await
    }

    async fn debit(&self, account_id: &str, amount: Money) -> Result<Wallet> {
        let account = account_id.to_string();
        self.writer
            .exec(move |conn| debit_wallet(conn, &account, amount.minor()).map(Wallet::from))
            .await
    }
}

/// Creates the zero-balance wallet row for a freshly created account.
pub(crate) fn insert_wallet(conn: &mut SqliteConnection, account: &str) -> Result<WalletDB> {
    let row = WalletDB {
        account_id: account.to_string(),
        balance: 0,
        updated_at: Utc::now().naive_utc(),
    };
    diesel::insert_into(wallets::table)
        .values(&row)
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(row)
}

/// Increases a wallet's balance inside the caller's transaction.
pub(crate) fn credit_wallet(
    conn: &mut SqliteConnection,
    account: &str,
    amount: i64,
) -> Result<WalletDB> {
    let updated = diesel::update(wallets::table.find(account))
        .set((
            wallets::balance.eq(wallets::balance + amount),
            wallets::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(conn)
        .map_err(StorageError::from)?;

    if updated == 0 {
        return Err(WalletError::NotFound(account.to_string()).into());
    }

    let row = wallets::table
        .find(account)
        .first::<WalletDB>(conn)
        .map_err(StorageError::from)?;
    Ok(row)
}

/// Decreases a wallet's balance with a single conditional write: the
/// update only applies while the balance covers the amount, so the balance
/// can never go negative, and read-then-write cannot interleave with
/// another unit on the same wallet.
pub(crate) fn debit_wallet(
    conn: &mut SqliteConnection,
    account: &str,
    amount: i64,
) -> Result<WalletDB> {
    let updated = diesel::update(
        wallets::table.filter(
            wallets::account_id
                .eq(account)
                .and(wallets::balance.ge(amount)),
        ),
    )
    .set((
        wallets::balance.eq(wallets::balance - amount),
        wallets::updated_at.eq(Utc::now().naive_utc()),
    ))
    .execute(conn)
    .map_err(StorageError::from)?;

    if updated == 0 {
        let row = wallets::table
            .find(account)
            .first::<WalletDB>(conn)
            .optional()
            .map_err(StorageError::from)?;
        return match row {
            Some(row) => Err(WalletError::InsufficientFunds {
                balance: Money::from_minor(row.balance),
                requested: Money::from_minor(amount),
            }
            .into()),
            None => Err(WalletError::NotFound(account.to_string()).into()),
        };
    }

    let row = wallets::table
        .find(account)
        .first::<WalletDB>(conn)
        .map_err(StorageError::from)?;
    Ok(row)
}
