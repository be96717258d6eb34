//! Database models for budgets.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use renoplan_core::budgets::{Budget, BudgetMember, BudgetRole};
use renoplan_core::utils::money::parse_amount;

use crate::utils::parse_datetime;

/// Database model for budgets
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
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: String,
    pub name: String,
    pub total_budget: String,
    pub currency: String,
    pub owner_user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for budget memberships
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
#[diesel(table_name = crate::schema::budget_members)]
#[diesel(primary_key(budget_id, user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetMemberDB {
    pub budget_id: String,
    pub user_id: String,
    pub role: String,
    pub invited_by: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// Conversion to domain models
impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            total_budget: parse_amount(&db.total_budget),
            currency: db.currency,
            owner_user_id: db.owner_user_id,
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}

impl From<BudgetMemberDB> for BudgetMember {
    fn from(db: BudgetMemberDB) -> Self {
        let role = BudgetRole::parse(&db.role).unwrap_or_else(|| {
            log::warn!("Unknown role '{}', treating as guest", db.role);
            BudgetRole::Guest
        });
        Self {
            budget_id: db.budget_id,
            user_id: db.user_id,
            role,
            invited_by: db.invited_by,
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}
