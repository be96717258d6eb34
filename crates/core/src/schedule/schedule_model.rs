//! Delivery schedule assembly.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::wishlist::{ScheduleEvent, ScheduleEventKind, WishlistItem, WishlistItemStatus};
use crate::zones::Zone;

/// One row of the budget-wide delivery/installation overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryScheduleItem {
    pub wishlist_item_id: String,
    pub wishlist_item_name: String,
    pub zone_id: String,
    pub zone_name: String,
    pub delivery_date: Option<NaiveDate>,
    pub installation_date: Option<NaiveDate>,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_mobile: Option<String>,
    pub company_brand_name: Option<String>,
    pub delivery_scheduled: bool,
    pub status: WishlistItemStatus,
}

/// Assembles the delivery schedule for a budget from read snapshots.
///
/// Only items with at least one scheduled date appear; rows are ordered by
/// item name.
pub fn build_delivery_schedule(
    zones: &[Zone],
    items: &[WishlistItem],
    events: &[ScheduleEvent],
) -> Vec<DeliveryScheduleItem> {
    let zone_names: HashMap<&str, &str> = zones
        .iter()
        .map(|z| (z.id.as_str(), z.name.as_str()))
        .collect();

    let mut events_by_item: HashMap<&str, Vec<&ScheduleEvent>> = HashMap::new();
    for event in events {
        events_by_item
            .entry(event.wishlist_item_id.as_str())
            .or_default()
            .push(event);
    }

    let mut rows: Vec<DeliveryScheduleItem> = items
        .iter()
        .filter_map(|item| {
            let item_events = events_by_item
                .get(item.id.as_str())
                .map(|v| v.as_slice())
                .unwrap_or(&[]);

            let delivery = item_events
                .iter()
                .find(|e| e.kind == ScheduleEventKind::Delivery);
            let installation = item_events
                .iter()
                .find(|e| e.kind == ScheduleEventKind::Installation);
            if delivery.is_none() && installation.is_none() {
                return None;
            }

            // Prefer whichever event actually carries contact details.
            let contact = item_events
                .iter()
                .find(|e| {
                    e.contact_person_name.is_some()
                        || e.contact_person_email.is_some()
                        || e.contact_person_mobile.is_some()
                        || e.company_brand_name.is_some()
                })
                .or(item_events.first());

            Some(DeliveryScheduleItem {
                wishlist_item_id: item.id.clone(),
                wishlist_item_name: item.name.clone(),
                zone_id: item.zone_id.clone(),
                zone_name: zone_names
                    .get(item.zone_id.as_str())
                    .unwrap_or(&"Untitled zone")
                    .to_string(),
                delivery_date: delivery.map(|e| e.scheduled_at),
                installation_date: installation.map(|e| e.scheduled_at),
                contact_person_name: contact.and_then(|e| e.contact_person_name.clone()),
                contact_person_email: contact.and_then(|e| e.contact_person_email.clone()),
                contact_person_mobile: contact.and_then(|e| e.contact_person_mobile.clone()),
                company_brand_name: contact.and_then(|e| e.company_brand_name.clone()),
                delivery_scheduled: delivery.map(|e| e.delivery_scheduled).unwrap_or(false),
                status: item.status,
            })
        })
        .collect();

    rows.sort_by(|a, b| a.wishlist_item_name.cmp(&b.wishlist_item_name));
    rows
}
