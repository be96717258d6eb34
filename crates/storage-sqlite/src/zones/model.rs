//! Database models for zones.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use renoplan_core::zones::Zone;

use crate::budgets::BudgetDB;
use crate::utils::parse_datetime;

/// Database model for zones
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
#[diesel(table_name = crate::schema::zones)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ZoneDB {
    pub id: String,
    pub budget_id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ZoneDB> for Zone {
    fn from(db: ZoneDB) -> Self {
        Self {
            id: db.id,
            budget_id: db.budget_id,
            name: db.name,
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}
