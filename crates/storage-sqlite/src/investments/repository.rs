use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use coffer_core::investments::{
    Investment, InvestmentError, InvestmentRepositoryTrait, InvestmentWithPlan, NewInvestment,
    INVESTMENT_STATUS_ACTIVE, INVESTMENT_STATUS_COMPLETED,
};
use coffer_core::money::Money;
use coffer_core::transactions::NewTransaction;
use coffer_core::Result;

use super::model::{investment_with_plan, InvestmentDB, NewInvestmentDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::plans::PlanDB;
use crate::schema::{investments, plans};
use crate::transactions::insert_transaction;
use crate::wallets::{credit_wallet, debit_wallet};

/// Repository for the investment lifecycle.
///
/// Open and claim are compound writer jobs: the ledger effect, the
/// investment row change, and the audit log append commit together or not
/// at all.
pub struct InvestmentRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        InvestmentRepository { pool, writer }
    }

    fn get_for_account_impl(&self, investment_id: &str, account: &str) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;
        let row = investments::table
            .find(investment_id)
            .filter(investments::account_id.eq(account))
            .first::<InvestmentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| InvestmentError::NotFound(investment_id.to_string()))?;
        row.try_into()
    }

    fn list_for_account_impl(&self, account: &str) -> Result<Vec<InvestmentWithPlan>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = investments::table
            .inner_join(plans::table)
            .filter(investments::account_id.eq(account))
            .select((InvestmentDB::as_select(), PlanDB::as_select()))
            .order((investments::start_at.desc(), investments::id.desc()))
            .load::<(InvestmentDB, PlanDB)>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|(investment, plan)| investment_with_plan(investment, plan))
            .collect()
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    async fn open(&self, new_investment: NewInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                // Debit first: if the wallet cannot cover the principal,
                // the job rolls back and no investment exists.
                debit_wallet(conn, &new_investment.account_id, new_investment.amount.minor())?;

                let mut row: NewInvestmentDB = new_investment.into();
                if row.id.is_none() {
                    row.id = Some(Uuid::new_v4().to_string());
                }

                let inserted = diesel::insert_into(investments::table)
                    .values(&row)
                    .returning(InvestmentDB::as_returning())
                    .get_result::<InvestmentDB>(conn)
                    .map_err(StorageError::from)?;

                let meta = serde_json::json!({ "planId": &inserted.plan_id }).to_string();
                insert_transaction(
                    conn,
                    NewTransaction::investment_log(
                        &inserted.account_id,
                        Money::from_minor(inserted.amount),
                        Some(meta),
                    ),
                )?;

                inserted.try_into()
            })
            .await
    }

    async fn claim(
        &self,
        investment_id: &str,
        account_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Investment> {
        let investment_id = investment_id.to_string();
        let account = account_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                let row = investments::table
                    .find(&investment_id)
                    .filter(investments::account_id.eq(&account))
                    .first::<InvestmentDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| InvestmentError::NotFound(investment_id.clone()))?;

                if row.status != INVESTMENT_STATUS_ACTIVE {
                    return Err(InvestmentError::AlreadyClaimed(investment_id.clone()).into());
                }
                // Maturity is inclusive: claimable at exactly the end
                // timestamp.
                if now.naive_utc() < row.end_at {
                    return Err(InvestmentError::NotMatured(investment_id.clone()).into());
                }

                // The status guard makes the payout happen at most once.
                let updated = diesel::update(
                    investments::table
                        .find(&investment_id)
                        .filter(investments::status.eq(INVESTMENT_STATUS_ACTIVE)),
                )
                .set(investments::status.eq(INVESTMENT_STATUS_COMPLETED))
                .execute(conn)
                .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(InvestmentError::AlreadyClaimed(investment_id.clone()).into());
                }

                credit_wallet(conn, &account, row.payout)?;

                let meta = serde_json::json!({ "investmentId": &row.id }).to_string();
                insert_transaction(
                    conn,
                    NewTransaction::payout_log(&account, Money::from_minor(row.payout), Some(meta)),
                )?;

                let row = investments::table
                    .find(&investment_id)
                    .first::<InvestmentDB>(conn)
                    .map_err(StorageError::from)?;
                row.try_into()
            })
            .await
    }

    fn get_for_account(&self, investment_id: &str, account_id: &str) -> Result<Investment> {
        self.get_for_account_impl(investment_id, account_id)
    }

    fn list_for_account(&self, account_id: &str) -> Result<Vec<InvestmentWithPlan>> {
        self.list_for_account_impl(account_id)
    }
}
