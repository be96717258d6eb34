//! Database models for wishlist items and schedule events.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use renoplan_core::utils::money::parse_amount;
use renoplan_core::wishlist::{
    ScheduleEvent, ScheduleEventKind, WishlistItem, WishlistItemStatus,
};

use crate::utils::{parse_datetime, parse_optional_date};
use crate::zones::ZoneDB;

/// Database model for wishlist items
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
#[diesel(belongs_to(ZoneDB, foreign_key = zone_id))]
#[diesel(table_name = crate::schema::wishlist_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemDB {
    pub id: String,
    pub zone_id: String,
    pub name: String,
    pub budget: String,
    pub status: String,
    pub must_purchase_before: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for schedule events. One row per (item, kind).
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
#[diesel(table_name = crate::schema::wishlist_item_events)]
#[diesel(primary_key(wishlist_item_id, kind))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventDB {
    pub wishlist_item_id: String,
    pub kind: String,
    pub scheduled_at: String,
    pub delivery_scheduled: bool,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_mobile: Option<String>,
    pub company_brand_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<WishlistItemDB> for WishlistItem {
    fn from(db: WishlistItemDB) -> Self {
        let status = WishlistItemStatus::parse(&db.status).unwrap_or_else(|| {
            log::warn!("Unknown item status '{}', treating as not started", db.status);
            WishlistItemStatus::NotStarted
        });
        Self {
            id: db.id,
            zone_id: db.zone_id,
            name: db.name,
            budget: parse_amount(&db.budget),
            status,
            must_purchase_before: parse_optional_date(db.must_purchase_before.as_deref()),
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}

impl ScheduleEventDB {
    /// Converts to the domain event; rows with a kind this version does not
    /// know are dropped rather than misfiled.
    pub fn into_domain(self) -> Option<ScheduleEvent> {
        let Some(kind) = ScheduleEventKind::parse(&self.kind) else {
            log::warn!("Dropping schedule event with unknown kind '{}'", self.kind);
            return None;
        };
        let scheduled_at = parse_optional_date(Some(self.scheduled_at.as_str()))?;
        Some(ScheduleEvent {
            wishlist_item_id: self.wishlist_item_id,
            kind,
            scheduled_at,
            delivery_scheduled: self.delivery_scheduled,
            contact_person_name: self.contact_person_name,
            contact_person_email: self.contact_person_email,
            contact_person_mobile: self.contact_person_mobile,
            company_brand_name: self.company_brand_name,
        })
    }
}
