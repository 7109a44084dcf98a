use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use coffer_core::transactions::{
    NewTransaction, Transaction, TransactionError, TransactionKind, TransactionRepositoryTrait,
    TRANSACTION_STATUS_APPROVED, TRANSACTION_STATUS_PENDING, TRANSACTION_STATUS_REJECTED,
};
use coffer_core::Result;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;
use crate::wallets::{credit_wallet, debit_wallet};

/// Repository for the request queue and money-movement log.
///
/// The approve operations run the status transition and its ledger effect
/// in the same writer job: an approval that fails to move the money leaves
/// the request pending, and a moved ledger never coexists with an
/// unresolved request.
pub struct TransactionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        TransactionRepository { pool, writer }
    }

    fn get_by_id_impl(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let row = transactions::table
            .find(transaction_id)
            .first::<TransactionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| TransactionError::NotFound(transaction_id.to_string()))?;
        row.try_into()
    }

    fn list_for_account_impl(&self, account: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::account_id.eq(account))
            .order((transactions::created_at.desc(), transactions::id.desc()))
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Transaction::try_from).collect()
    }

    fn list_pending_impl(&self) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::status.eq(TRANSACTION_STATUS_PENDING))
            .order((transactions::created_at.asc(), transactions::id.asc()))
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Transaction::try_from).collect()
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| insert_transaction(conn, new_transaction))
            .await
    }

    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        self.get_by_id_impl(transaction_id)
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.list_for_account_impl(account_id)
    }

    fn list_pending(&self) -> Result<Vec<Transaction>> {
        self.list_pending_impl()
    }

    async fn approve_deposit(&self, request_id: &str) -> Result<Transaction> {
        let request_id = request_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| {
                let request = load_request(conn, &request_id, TransactionKind::Deposit)?;
                credit_wallet(conn, &request.account_id, request.amount)?;
                resolve_request(conn, &request_id, TRANSACTION_STATUS_APPROVED)
            })
            .await
    }

    async fn approve_withdraw(&self, request_id: &str) -> Result<Transaction> {
        let request_id = request_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| {
                let request = load_request(conn, &request_id, TransactionKind::Withdraw)?;
                // The balance is re-checked here, at approval time; a
                // failed debit rolls the job back and the request stays
                // pending for the admin to retry or reject.
                debit_wallet(conn, &request.account_id, request.amount)?;
                resolve_request(conn, &request_id, TRANSACTION_STATUS_APPROVED)
            })
            .await
    }

    async fn reject(&self, request_id: &str, kind: TransactionKind) -> Result<Transaction> {
        let request_id = request_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| {
                load_request(conn, &request_id, kind)?;
                resolve_request(conn, &request_id, TRANSACTION_STATUS_REJECTED)
            })
            .await
    }
}

/// Inserts a transaction row inside the caller's transaction, assigning an
/// id when the input carries none.
pub(crate) fn insert_transaction(
    conn: &mut SqliteConnection,
    new_transaction: NewTransaction,
) -> Result<Transaction> {
    let mut row: NewTransactionDB = new_transaction.into();
    if row.id.is_none() {
        row.id = Some(Uuid::new_v4().to_string());
    }

    let inserted = diesel::insert_into(transactions::table)
        .values(&row)
        .returning(TransactionDB::as_returning())
        .get_result::<TransactionDB>(conn)
        .map_err(StorageError::from)?;
    inserted.try_into()
}

/// Loads a pending request of the given kind, distinguishing a missing or
/// differently-kinded row (`NotFound`) from one already resolved
/// (`AlreadyResolved`).
fn load_request(
    conn: &mut SqliteConnection,
    request_id: &str,
    kind: TransactionKind,
) -> Result<TransactionDB> {
    let row = transactions::table
        .find(request_id)
        .filter(transactions::kind.eq(kind.as_str()))
        .first::<TransactionDB>(conn)
        .optional()
        .map_err(StorageError::from)?
        .ok_or_else(|| TransactionError::NotFound(request_id.to_string()))?;

    if row.status != TRANSACTION_STATUS_PENDING {
        return Err(TransactionError::AlreadyResolved(request_id.to_string()).into());
    }
    Ok(row)
}

/// Flips a pending request to its terminal status with a conditional
/// write. The `status = 'PENDING'` guard is what makes the transition
/// happen at most once.
fn resolve_request(
    conn: &mut SqliteConnection,
    request_id: &str,
    new_status: &str,
) -> Result<Transaction> {
    let updated = diesel::update(
        transactions::table
            .find(request_id)
            .filter(transactions::status.eq(TRANSACTION_STATUS_PENDING)),
    )
    .set(transactions::status.eq(new_status))
    .execute(conn)
    .map_err(StorageError::from)?;

    if updated == 0 {
        return Err(TransactionError::AlreadyResolved(request_id.to_string()).into());
    }

    let row = transactions::table
        .find(request_id)
        .first::<TransactionDB>(conn)
        .map_err(StorageError::from)?;
    row.try_into()
}
