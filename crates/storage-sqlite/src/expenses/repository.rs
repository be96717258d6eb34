use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use renoplan_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use renoplan_core::Result;

use super::model::ExpenseDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{expenses, wishlist_items, zones};
use crate::utils::{chunk_for_sqlite, format_date, now_utc_text};

pub struct ExpenseRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .inner_join(wishlist_items::table.inner_join(zones::table))
            .filter(zones::budget_id.eq(budget_id))
            .order(expenses::created_at.desc())
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn list_for_items(&self, item_ids: &[String]) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let mut results = Vec::new();
        for chunk in chunk_for_sqlite(item_ids) {
            let rows = expenses::table
                .filter(expenses::wishlist_item_id.eq_any(chunk))
                .load::<ExpenseDB>(&mut conn)
                .map_err(StorageError::from)?;
            results.extend(rows.into_iter().map(Expense::from));
        }
        Ok(results)
    }

    fn count_for_item(&self, item_id: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let count = expenses::table
            .filter(expenses::wishlist_item_id.eq(item_id))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count)
    }

    async fn create(&self, new_expense: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let now = now_utc_text();
                let expense_db = ExpenseDB {
                    id: Uuid::new_v4().to_string(),
                    wishlist_item_id: new_expense.wishlist_item_id,
                    amount: new_expense.amount.to_string(),
                    description: new_expense.description,
                    expense_date: new_expense.expense_date.map(format_date),
                    created_at: now.clone(),
                    updated_at: now,
                };

                let result_db = diesel::insert_into(expenses::table)
                    .values(&expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn update(&self, update: ExpenseUpdate) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let result_db = diesel::update(expenses::table.find(&update.id))
                    .set((
                        expenses::amount.eq(update.amount.to_string()),
                        expenses::description.eq(&update.description),
                        expenses::expense_date.eq(update.expense_date.map(format_date)),
                        expenses::updated_at.eq(now_utc_text()),
                    ))
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn delete(&self, expense_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(expenses::table.find(&expense_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
