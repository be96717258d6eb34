//! Database models for contract expenses.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use renoplan_core::contracts::{
    ContractExpenseRecord, ContractExpenseType, ContractMilestone, ContractPayment,
};
use renoplan_core::utils::money::parse_amount;

use crate::budgets::BudgetDB;
use crate::utils::{parse_datetime, parse_optional_date};

/// Database model for contract expense base rows
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    Associations,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(BudgetDB, foreign_key = budget_id))]
#[diesel(table_name = crate::schema::contract_expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ContractExpenseDB {
    pub id: String,
    pub budget_id: String,
    pub expense_type: String,
    pub expense_name: String,
    pub expense_date: Option<String>,
    pub notes: Option<String>,
    pub vendor_name: String,
    pub contract_total_amount: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for contract milestones
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    Associations,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(ContractExpenseDB, foreign_key = contract_expense_id))]
#[diesel(table_name = crate::schema::contract_milestones)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ContractMilestoneDB {
    pub id: String,
    pub contract_expense_id: String,
    pub sequence_number: i32,
    pub percentage: Option<String>,
    pub amount: Option<String>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for contract payments
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    Associations,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(ContractExpenseDB, foreign_key = contract_expense_id))]
#[diesel(table_name = crate::schema::contract_payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ContractPaymentDB {
    pub id: String,
    pub contract_expense_id: String,
    pub amount: String,
    pub paid_at: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to domain models
impl From<ContractExpenseDB> for ContractExpenseRecord {
    fn from(db: ContractExpenseDB) -> Self {
        let expense_type = ContractExpenseType::parse(&db.expense_type).unwrap_or_else(|| {
            log::warn!(
                "Unknown contract expense type '{}', treating as renovation cost",
                db.expense_type
            );
            ContractExpenseType::RenovationCost
        });
        Self {
            id: db.id,
            budget_id: db.budget_id,
            expense_type,
            expense_name: db.expense_name,
            expense_date: parse_optional_date(db.expense_date.as_deref()),
            notes: db.notes,
            vendor_name: db.vendor_name,
            contract_total_amount: db.contract_total_amount.as_deref().map(parse_amount),
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}

impl From<ContractMilestoneDB> for ContractMilestone {
    fn from(db: ContractMilestoneDB) -> Self {
        Self {
            id: db.id,
            contract_expense_id: db.contract_expense_id,
            sequence_number: db.sequence_number,
            percentage: db.percentage.as_deref().map(parse_amount),
            amount: db.amount.as_deref().map(parse_amount),
            due_date: parse_optional_date(db.due_date.as_deref()),
            notes: db.notes,
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}

impl From<ContractPaymentDB> for ContractPayment {
    fn from(db: ContractPaymentDB) -> Self {
        Self {
            id: db.id,
            contract_expense_id: db.contract_expense_id,
            amount: parse_amount(&db.amount),
            paid_at: parse_optional_date(Some(db.paid_at.as_str())).unwrap_or_default(),
            notes: db.notes,
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}
