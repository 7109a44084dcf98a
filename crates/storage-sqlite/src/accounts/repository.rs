use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use coffer_core::accounts::{
    Account, AccountError, AccountRepositoryTrait, AccountWithBalance, NewAccount,
};
use coffer_core::Result;

use super::model::{account_with_balance, AccountDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{accounts, wallets};
use crate::wallets::insert_wallet;

pub struct AccountRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AccountRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        AccountRepository { pool, writer }
    }

    fn get_by_id_impl(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;
        let row = accounts::table
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| AccountError::NotFound(account_id.to_string()))?;
        Ok(row.into())
    }

    fn list_with_balances_impl(&self) -> Result<Vec<AccountWithBalance>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = accounts::table
            .inner_join(wallets::table)
            .select((AccountDB::as_select(), wallets::balance))
            .order(accounts::created_at.asc())
            .load::<(AccountDB, i64)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|(account, balance)| account_with_balance(account, balance))
            .collect())
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Account> {
                let mut account_db: AccountDB = new_account.into();
                if account_db.id.is_empty() {
                    account_db.id = Uuid::new_v4().to_string();
                }

                diesel::insert_into(accounts::table)
                    .values(&account_db)
                    .execute(conn)
                    .map_err(|e| -> coffer_core::Error {
                        match e {
                            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                                AccountError::Duplicate(account_db.name.clone()).into()
                            }
                            other => StorageError::from(other).into(),
                        }
                    })?;

                // The wallet is born with the account; nothing can observe
                // one without the other.
                insert_wallet(conn, &account_db.id)?;

                Ok(account_db.into())
            })
            .await
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        self.get_by_id_impl(account_id)
    }

    fn list_with_balances(&self) -> Result<Vec<AccountWithBalance>> {
        self.list_with_balances_impl()
    }
}
