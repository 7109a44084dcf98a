use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use coffer_core::plans::{NewPlan, Plan, PlanError, PlanRepositoryTrait, PlanUpdate};
use coffer_core::Result;

use super::model::{NewPlanDB, PlanChangesetDB, PlanDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::plans;

pub struct PlanRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PlanRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PlanRepository { pool, writer }
    }

    fn get_by_id_impl(&self, plan_id: &str) -> Result<Plan> {
        let mut conn = get_connection(&self.pool)?;
        load_plan(&mut conn, plan_id)
    }

    fn list_active_impl(&self) -> Result<Vec<Plan>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = plans::table
            .filter(plans::is_active.eq(true))
            .order(plans::min_amount.asc())
            .load::<PlanDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Plan::try_from).collect()
    }
}

#[async_trait]
impl PlanRepositoryTrait for PlanRepository {
    fn get_by_id(&self, plan_id: &str) -> Result<Plan> {
        self.get_by_id_impl(plan_id)
    }

    fn list_active(&self) -> Result<Vec<Plan>> {
        self.list_active_impl()
    }

    async fn insert(&self, new_plan: NewPlan) -> Result<Plan> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Plan> {
                let mut row: NewPlanDB = new_plan.into();
                if row.id.is_none() {
                    row.id = Some(Uuid::new_v4().to_string());
                }

                let inserted = diesel::insert_into(plans::table)
                    .values(&row)
                    .returning(PlanDB::as_returning())
                    .get_result::<PlanDB>(conn)
                    .map_err(StorageError::from)?;
                inserted.try_into()
            })
            .await
    }

    async fn update(&self, plan_update: PlanUpdate) -> Result<Plan> {
        let plan_id = plan_update.id.clone();

        // An empty update would make Diesel balk at the query; it is also a
        // no-op, so just return the current row.
        if !plan_update.has_changes() {
            return self.get_by_id_impl(&plan_id);
        }

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Plan> {
                let changeset: PlanChangesetDB = plan_update.into();
                let updated = diesel::update(plans::table.find(&plan_id))
                    .set(&changeset)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(PlanError::NotFound(plan_id.clone()).into());
                }
                load_plan(conn, &plan_id)
            })
            .await
    }
}

fn load_plan(conn: &mut SqliteConnection, plan_id: &str) -> Result<Plan> {
    let row = plans::table
        .find(plan_id)
        .first::<PlanDB>(conn)
        .optional()
        .map_err(StorageError::from)?
        .ok_or_else(|| PlanError::NotFound(plan_id.to_string()))?;
    row.try_into()
}
