use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use renoplan_core::budgets::{
    Budget, BudgetMember, BudgetMemberUpsert, BudgetRepositoryTrait, BudgetRole, NewBudget,
};
use renoplan_core::constants::DEFAULT_CURRENCY;
use renoplan_core::Result;

use super::model::{BudgetDB, BudgetMemberDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{budget_members, budgets};
use crate::utils::now_utc_text;

pub struct BudgetRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn list(&self) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .order(budgets::created_at.desc())
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Budget::from).collect())
    }

    fn find_by_id(&self, budget_id: &str) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budgets::table
            .find(budget_id)
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Budget::from))
    }

    fn latest(&self) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budgets::table
            .order(budgets::created_at.desc())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Budget::from))
    }

    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let now = now_utc_text();
                let budget_db = BudgetDB {
                    id: Uuid::new_v4().to_string(),
                    name: new_budget.name,
                    total_budget: new_budget.total_budget.to_string(),
                    currency: new_budget
                        .currency
                        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                    owner_user_id: new_budget.owner_user_id,
                    created_at: now.clone(),
                    updated_at: now,
                };

                let result_db = diesel::insert_into(budgets::table)
                    .values(&budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(result_db))
            })
            .await
    }

    fn list_members(&self, budget_id: &str) -> Result<Vec<BudgetMember>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budget_members::table
            .filter(budget_members::budget_id.eq(budget_id))
            .order(budget_members::created_at.asc())
            .load::<BudgetMemberDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(BudgetMember::from).collect())
    }

    fn member_role(&self, budget_id: &str, user_id: &str) -> Result<Option<BudgetRole>> {
        let mut conn = get_connection(&self.pool)?;
        let row = budget_members::table
            .find((budget_id, user_id))
            .first::<BudgetMemberDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(|db| BudgetMember::from(db).role))
    }

    async fn upsert_member(&self, member: BudgetMemberUpsert) -> Result<BudgetMember> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BudgetMember> {
                let now = now_utc_text();
                let member_db = BudgetMemberDB {
                    budget_id: member.budget_id,
                    user_id: member.user_id,
                    role: member.role.as_str().to_string(),
                    invited_by: member.invited_by,
                    created_at: now.clone(),
                    updated_at: now.clone(),
                };

                let result_db = diesel::insert_into(budget_members::table)
                    .values(&member_db)
                    .on_conflict((budget_members::budget_id, budget_members::user_id))
                    .do_update()
                    .set((
                        budget_members::role.eq(&member_db.role),
                        budget_members::invited_by.eq(&member_db.invited_by),
                        budget_members::updated_at.eq(&now),
                    ))
                    .returning(BudgetMemberDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(BudgetMember::from(result_db))
            })
            .await
    }

    async fn remove_member(&self, budget_id: String, user_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(budget_members::table.find((budget_id, user_id)))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
