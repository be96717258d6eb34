//! Zone detail aggregation.
//!
//! Builds the per-zone drill-down view: the item lists split by purchase
//! state, the zone-level totals, and one purchase record per expense of a
//! purchased item. Pure functions over already-fetched snapshots.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::Expense;
use crate::wishlist::{ScheduleEvent, ScheduleEventKind, WishlistItem, WishlistItemStatus};
use crate::zones::zones_model::Zone;

/// Identity of the zone a detail view belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetailHeader {
    pub id: String,
    pub budget_id: String,
    pub name: String,
    pub currency: String,
}

/// One wishlist item as shown in the zone drill-down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetailItem {
    pub id: String,
    pub name: String,
    pub allocated_budget: Decimal,
    pub amount_spent: Decimal,
    pub must_purchase_before: Option<NaiveDate>,
    pub status: WishlistItemStatus,
}

/// One row per expense of a purchased item, with delivery details folded in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedItemRecord {
    pub id: String,
    pub wishlist_item_id: String,
    pub item_name: String,
    pub description: String,
    pub budget: Decimal,
    pub amount_spent: Decimal,
    /// Allocated budget minus this expense; negative means overspend.
    pub difference: Decimal,
    pub purchase_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub installation_date: Option<NaiveDate>,
    pub contact_person_name: Option<String>,
    pub contact_person_email: Option<String>,
    pub contact_person_mobile: Option<String>,
    pub company_brand_name: Option<String>,
    pub delivery_scheduled: bool,
    pub status: WishlistItemStatus,
}

/// Composed detail view for a single zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetail {
    pub zone: ZoneDetailHeader,
    pub allocated_budget: Decimal,
    pub amount_spent: Decimal,
    pub budget_left: Decimal,
    pub purchased_items: Vec<ZoneDetailItem>,
    pub unpurchased_items: Vec<ZoneDetailItem>,
    pub purchased_item_records: Vec<PurchasedItemRecord>,
}

#[derive(Default, Clone)]
struct ItemSchedule {
    delivery_date: Option<NaiveDate>,
    installation_date: Option<NaiveDate>,
    delivery_scheduled: bool,
    contact_person_name: Option<String>,
    contact_person_email: Option<String>,
    contact_person_mobile: Option<String>,
    company_brand_name: Option<String>,
}

fn schedule_by_item(events: &[ScheduleEvent]) -> HashMap<String, ItemSchedule> {
    let mut by_item: HashMap<String, ItemSchedule> = HashMap::new();
    for event in events {
        let entry = by_item
            .entry(event.wishlist_item_id.clone())
            .or_default();
        match event.kind {
            ScheduleEventKind::Delivery => {
                entry.delivery_date = Some(event.scheduled_at);
                entry.delivery_scheduled = event.delivery_scheduled;
            }
            ScheduleEventKind::Installation => {
                entry.installation_date = Some(event.scheduled_at);
            }
        }
        // Either event kind may carry the contact details; last write wins.
        entry.contact_person_name = event
            .contact_person_name
            .clone()
            .or(entry.contact_person_name.take());
        entry.contact_person_email = event
            .contact_person_email
            .clone()
            .or(entry.contact_person_email.take());
        entry.contact_person_mobile = event
            .contact_person_mobile
            .clone()
            .or(entry.contact_person_mobile.take());
        entry.company_brand_name = event
            .company_brand_name
            .clone()
            .or(entry.company_brand_name.take());
    }
    by_item
}

/// Composes the zone drill-down from read snapshots.
///
/// `items` must already be scoped to the zone; `expenses` and `events` are
/// filtered by item id, so passing budget-wide slices is harmless.
pub fn build_zone_detail(
    zone: &Zone,
    currency: &str,
    items: &[WishlistItem],
    expenses: &[Expense],
    events: &[ScheduleEvent],
) -> ZoneDetail {
    let mut expense_totals: HashMap<&str, Decimal> = HashMap::new();
    let mut expenses_by_item: HashMap<&str, Vec<&Expense>> = HashMap::new();
    for expense in expenses {
        *expense_totals
            .entry(expense.wishlist_item_id.as_str())
            .or_insert(Decimal::ZERO) += expense.amount;
        expenses_by_item
            .entry(expense.wishlist_item_id.as_str())
            .or_default()
            .push(expense);
    }
    let schedules = schedule_by_item(events);

    let detail_items: Vec<ZoneDetailItem> = items
        .iter()
        .map(|item| ZoneDetailItem {
            id: item.id.clone(),
            name: item.name.clone(),
            allocated_budget: item.budget,
            amount_spent: expense_totals
                .get(item.id.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO),
            must_purchase_before: item.must_purchase_before,
            status: item.status,
        })
        .collect();

    let allocated_budget: Decimal = detail_items.iter().map(|i| i.allocated_budget).sum();
    let amount_spent: Decimal = detail_items.iter().map(|i| i.amount_spent).sum();

    let (purchased_items, unpurchased_items): (Vec<ZoneDetailItem>, Vec<ZoneDetailItem>) =
        detail_items
            .into_iter()
            .partition(|item| item.status.is_purchased());

    let purchased_item_records: Vec<PurchasedItemRecord> = purchased_items
        .iter()
        .flat_map(|item| {
            let schedule = schedules.get(&item.id).cloned().unwrap_or_default();
            expenses_by_item
                .get(item.id.as_str())
                .map(|v| v.as_slice())
                .unwrap_or(&[])
                .iter()
                .map(move |expense| {
                    let description = expense
                        .description
                        .as_deref()
                        .map(str::trim)
                        .unwrap_or("")
                        .to_string();
                    PurchasedItemRecord {
                        id: expense.id.clone(),
                        wishlist_item_id: item.id.clone(),
                        item_name: item.name.clone(),
                        description,
                        budget: item.allocated_budget,
                        amount_spent: expense.amount,
                        difference: item.allocated_budget - expense.amount,
                        purchase_date: expense.expense_date,
                        delivery_date: schedule.delivery_date,
                        installation_date: schedule.installation_date,
                        contact_person_name: schedule.contact_person_name.clone(),
                        contact_person_email: schedule.contact_person_email.clone(),
                        contact_person_mobile: schedule.contact_person_mobile.clone(),
                        company_brand_name: schedule.company_brand_name.clone(),
                        delivery_scheduled: schedule.delivery_scheduled,
                        status: item.status,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    ZoneDetail {
        zone: ZoneDetailHeader {
            id: zone.id.clone(),
            budget_id: zone.budget_id.clone(),
            name: zone.name.clone(),
            currency: currency.to_string(),
        },
        allocated_budget,
        amount_spent,
        budget_left: allocated_budget - amount_spent,
        purchased_items,
        unpurchased_items,
        purchased_item_records,
    }
}
