use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use renoplan_core::contracts::{
    ContractExpenseRecord, ContractMilestone, ContractPayment, ContractRepositoryTrait,
    NewContractExpense,
};
use renoplan_core::Result;

use super::model::{ContractExpenseDB, ContractMilestoneDB, ContractPaymentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{contract_expenses, contract_milestones, contract_payments};
use crate::utils::{chunk_for_sqlite, format_date, now_utc_text};

pub struct ContractRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ContractRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        ContractRepository { pool, writer }
    }
}

/// Inserts the milestone and payment child rows for one contract expense.
/// Runs inside the caller's transaction.
fn insert_children(
    conn: &mut SqliteConnection,
    contract_expense_id: &str,
    input: &NewContractExpense,
    now: &str,
) -> std::result::Result<(), StorageError> {
    let milestones: Vec<ContractMilestoneDB> = input
        .milestones
        .iter()
        .map(|m| ContractMilestoneDB {
            id: Uuid::new_v4().to_string(),
            contract_expense_id: contract_expense_id.to_string(),
            sequence_number: m.sequence_number,
            percentage: m.percentage.map(|p| p.to_string()),
            amount: m.amount.map(|a| a.to_string()),
            due_date: m.due_date.map(format_date),
            notes: m.notes.clone(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
        })
        .collect();

    let payments: Vec<ContractPaymentDB> = input
        .payments
        .iter()
        .map(|p| ContractPaymentDB {
            id: Uuid::new_v4().to_string(),
            contract_expense_id: contract_expense_id.to_string(),
            amount: p.amount.to_string(),
            paid_at: format_date(p.paid_at),
            notes: p.notes.clone(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
        })
        .collect();

    if !milestones.is_empty() {
        diesel::insert_into(contract_milestones::table)
            .values(&milestones)
            .execute(conn)?;
    }
    if !payments.is_empty() {
        diesel::insert_into(contract_payments::table)
            .values(&payments)
            .execute(conn)?;
    }
    Ok(())
}

#[async_trait]
impl ContractRepositoryTrait for ContractRepository {
    fn list_records_by_budget(&self, budget_id: &str) -> Result<Vec<ContractExpenseRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = contract_expenses::table
            .filter(contract_expenses::budget_id.eq(budget_id))
            .order((
                contract_expenses::expense_date.desc(),
                contract_expenses::created_at.desc(),
            ))
            .load::<ContractExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ContractExpenseRecord::from).collect())
    }

    fn find_record_by_id(
        &self,
        contract_expense_id: &str,
    ) -> Result<Option<ContractExpenseRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let row = contract_expenses::table
            .find(contract_expense_id)
            .first::<ContractExpenseDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(ContractExpenseRecord::from))
    }

    fn list_milestones_for(
        &self,
        contract_expense_ids: &[String],
    ) -> Result<Vec<ContractMilestone>> {
        let mut conn = get_connection(&self.pool)?;
        let mut milestones: Vec<ContractMilestone> = Vec::new();
        for chunk in chunk_for_sqlite(contract_expense_ids) {
            let rows = contract_milestones::table
                .filter(contract_milestones::contract_expense_id.eq_any(chunk))
                .load::<ContractMilestoneDB>(&mut conn)
                .map_err(StorageError::from)?;
            milestones.extend(rows.into_iter().map(ContractMilestone::from));
        }
        milestones.sort_by_key(|m| m.sequence_number);
        Ok(milestones)
    }

    fn list_payments_for(&self, contract_expense_ids: &[String]) -> Result<Vec<ContractPayment>> {
        let mut conn = get_connection(&self.pool)?;
        let mut payments: Vec<ContractPayment> = Vec::new();
        for chunk in chunk_for_sqlite(contract_expense_ids) {
            let rows = contract_payments::table
                .filter(contract_payments::contract_expense_id.eq_any(chunk))
                .load::<ContractPaymentDB>(&mut conn)
                .map_err(StorageError::from)?;
            payments.extend(rows.into_iter().map(ContractPayment::from));
        }
        payments.sort_by_key(|p| p.paid_at);
        Ok(payments)
    }

    async fn create(&self, input: NewContractExpense) -> Result<ContractExpenseRecord> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<ContractExpenseRecord> {
                    let now = now_utc_text();
                    let expense_db = ContractExpenseDB {
                        id: Uuid::new_v4().to_string(),
                        budget_id: input.budget_id.clone(),
                        expense_type: input.expense_type.as_str().to_string(),
                        expense_name: input.expense_name.clone(),
                        expense_date: input.expense_date.map(format_date),
                        notes: input.notes.clone(),
                        vendor_name: input.vendor_name.clone(),
                        contract_total_amount: input
                            .contract_total_amount
                            .map(|a| a.to_string()),
                        created_at: now.clone(),
                        updated_at: now.clone(),
                    };

                    let result_db: ContractExpenseDB =
                        diesel::insert_into(contract_expenses::table)
                            .values(&expense_db)
                            .returning(ContractExpenseDB::as_returning())
                            .get_result(conn)
                            .map_err(StorageError::from)?;

                    insert_children(conn, &result_db.id, &input, &now)?;

                    Ok(ContractExpenseRecord::from(result_db))
                },
            )
            .await
    }

    async fn update(
        &self,
        contract_expense_id: String,
        input: NewContractExpense,
    ) -> Result<ContractExpenseRecord> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<ContractExpenseRecord> {
                    let now = now_utc_text();
                    let result_db: ContractExpenseDB =
                        diesel::update(contract_expenses::table.find(&contract_expense_id))
                            .set((
                                contract_expenses::expense_type
                                    .eq(input.expense_type.as_str()),
                                contract_expenses::expense_name.eq(&input.expense_name),
                                contract_expenses::expense_date
                                    .eq(input.expense_date.map(format_date)),
                                contract_expenses::notes.eq(&input.notes),
                                contract_expenses::vendor_name.eq(&input.vendor_name),
                                contract_expenses::contract_total_amount
                                    .eq(input.contract_total_amount.map(|a| a.to_string())),
                                contract_expenses::updated_at.eq(&now),
                            ))
                            .returning(ContractExpenseDB::as_returning())
                            .get_result(conn)
                            .map_err(StorageError::from)?;

                    // Children are replaced wholesale; the dialog always
                    // submits the full set.
                    diesel::delete(
                        contract_milestones::table.filter(
                            contract_milestones::contract_expense_id.eq(&contract_expense_id),
                        ),
                    )
                    .execute(conn)
                    .map_err(StorageError::from)?;
                    diesel::delete(
                        contract_payments::table.filter(
                            contract_payments::contract_expense_id.eq(&contract_expense_id),
                        ),
                    )
                    .execute(conn)
                    .map_err(StorageError::from)?;

                    insert_children(conn, &contract_expense_id, &input, &now)?;

                    Ok(ContractExpenseRecord::from(result_db))
                },
            )
            .await
    }

    async fn delete(&self, contract_expense_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(contract_expenses::table.find(&contract_expense_id))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
