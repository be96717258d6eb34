//! Database models for expenses.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use renoplan_core::expenses::Expense;
use renoplan_core::utils::money::parse_amount;

use crate::utils::{parse_datetime, parse_optional_date};
use crate::wishlist::WishlistItemDB;

/// Database model for expenses
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
#[diesel(belongs_to(WishlistItemDB, foreign_key = wishlist_item_id))]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: String,
    pub wishlist_item_id: String,
    pub amount: String,
    pub description: Option<String>,
    pub expense_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            wishlist_item_id: db.wishlist_item_id,
            amount: parse_amount(&db.amount),
            description: db.description,
            expense_date: parse_optional_date(db.expense_date.as_deref()),
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}
