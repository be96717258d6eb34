//! Date notifications for approaching or missed deadlines.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::UPCOMING_WINDOW_DAYS;
use crate::zones::{PurchasedItemRecord, ZoneDetailItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Upcoming,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationField {
    MustPurchaseBefore,
    DeliveryDate,
    InstallationDate,
}

impl NotificationField {
    /// Stable key used in notification ids; matches the wire casing.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationField::MustPurchaseBefore => "mustPurchaseBefore",
            NotificationField::DeliveryDate => "deliveryDate",
            NotificationField::InstallationDate => "installationDate",
        }
    }

    /// Human-readable name, for display only.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationField::MustPurchaseBefore => "Must purchase before",
            NotificationField::DeliveryDate => "Delivery date",
            NotificationField::InstallationDate => "Installation date",
        }
    }
}

/// One deadline worth surfacing to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDateNotification {
    pub id: String,
    pub kind: NotificationKind,
    pub field: NotificationField,
    pub item_id: String,
    pub item_name: String,
    pub date_value: NaiveDate,
}

fn classify(due: NaiveDate, today: NaiveDate) -> Option<NotificationKind> {
    if today >= due {
        Some(NotificationKind::Overdue)
    } else if today >= due - Duration::days(UPCOMING_WINDOW_DAYS) {
        Some(NotificationKind::Upcoming)
    } else {
        None
    }
}

fn push_notification(
    out: &mut Vec<ItemDateNotification>,
    today: NaiveDate,
    due: Option<NaiveDate>,
    field: NotificationField,
    record_id: &str,
    item_id: &str,
    item_name: &str,
) {
    let Some(due) = due else { return };
    let Some(kind) = classify(due, today) else {
        return;
    };
    out.push(ItemDateNotification {
        id: format!("{}-{}", record_id, field.as_str()),
        kind,
        field,
        item_id: item_id.to_string(),
        item_name: item_name.to_string(),
        date_value: due,
    });
}

/// Collects deadline notifications from a zone's items and purchase records.
///
/// A must-purchase deadline stops firing once the item has been acted on;
/// delivery and installation dates always fire. Results are ordered by due
/// date, soonest first.
pub fn date_notifications(
    items: &[ZoneDetailItem],
    purchased_records: &[PurchasedItemRecord],
    today: NaiveDate,
) -> Vec<ItemDateNotification> {
    let mut notifications = Vec::new();

    for item in items {
        if item.status.is_purchased() {
            continue;
        }
        push_notification(
            &mut notifications,
            today,
            item.must_purchase_before,
            NotificationField::MustPurchaseBefore,
            &item.id,
            &item.id,
            &item.name,
        );
    }

    for record in purchased_records {
        push_notification(
            &mut notifications,
            today,
            record.delivery_date,
            NotificationField::DeliveryDate,
            &record.id,
            &record.wishlist_item_id,
            &record.item_name,
        );
        push_notification(
            &mut notifications,
            today,
            record.installation_date,
            NotificationField::InstallationDate,
            &record.id,
            &record.wishlist_item_id,
            &record.item_name,
        );
    }

    notifications.sort_by_key(|n| n.date_value);
    notifications
}
