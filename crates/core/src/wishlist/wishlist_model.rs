//! Wishlist item domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Purchase status of a wishlist item.
///
/// Transitions away from `NotStarted` happen through recorded expense
/// activity; the aggregation code only ever reads the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WishlistItemStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl WishlistItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WishlistItemStatus::NotStarted => "not_started",
            WishlistItemStatus::InProgress => "in_progress",
            WishlistItemStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "not_started" => Some(WishlistItemStatus::NotStarted),
            "in_progress" => Some(WishlistItemStatus::InProgress),
            "completed" => Some(WishlistItemStatus::Completed),
            _ => None,
        }
    }

    /// An item counts as purchased once it has moved off `NotStarted`.
    pub fn is_purchased(&self) -> bool {
        !matches!(self, WishlistItemStatus::NotStarted)
    }
}

/// Domain model for a planned purchase inside a zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub zone_id: String,
    pub name: String,
    pub budget: Decimal,
    pub status: WishlistItemStatus,
    pub must_purchase_before: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a wishlist item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWishlistItem {
    pub zone_id: String,
    pub name: String,
    #[serde(deserialize_with = "crate::utils::money::deserialize_amount")]
    pub budget: Decimal,
    pub must_purchase_before: Option<NaiveDate>,
}

impl NewWishlistItem {
    pub fn validate(&self) -> Result<()> {
        validate_item_fields(&self.name, self.budget)
    }
}

/// Input model for updating a wishlist item's name, budget, and deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemUpdate {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "crate::utils::money::deserialize_amount")]
    pub budget: Decimal,
    pub must_purchase_before: Option<NaiveDate>,
}

impl WishlistItemUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_item_fields(&self.name, self.budget)
    }
}

fn validate_item_fields(name: &str, budget: Decimal) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Wishlist item name is required".to_string(),
        )));
    }
    if budget < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Wishlist item budget must be at least 0".to_string(),
        )));
    }
    Ok(())
}

/// Kind of scheduled event attached to a wishlist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleEventKind {
    Delivery,
    Installation,
}

impl ScheduleEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleEventKind::Delivery => "delivery",
            ScheduleEventKind::Installation => "installation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "delivery" => Some(ScheduleEventKind::Delivery),
            "installation" => Some(ScheduleEventKind::Installation),
            _ => None,
        }
    }
}

/// A delivery or installation booking for a purchased item.
///
/// At most one event exists per (item, kind) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub wishlist_item_id: String,
    pub kind: ScheduleEventKind,
    pub scheduled_at: NaiveDate,
    pub delivery_scheduled: bool,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_mobile: Option<String>,
    pub company_brand_name: Option<String>,
}

/// Upsert payload for a schedule event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventUpsert {
    pub wishlist_item_id: String,
    pub kind: ScheduleEventKind,
    pub scheduled_at: NaiveDate,
    pub delivery_scheduled: bool,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_mobile: Option<String>,
    pub company_brand_name: Option<String>,
}

/// Everything a caller can set from the scheduling dialog in one call.
/// A `None` date clears the corresponding event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDatesInput {
    pub delivery_date: Option<NaiveDate>,
    pub installation_date: Option<NaiveDate>,
    pub delivery_scheduled: bool,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_mobile: Option<String>,
    pub company_brand_name: Option<String>,
}
