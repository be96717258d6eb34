//! Tests for deadline notifications.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::schedule::{date_notifications, NotificationField, NotificationKind};
    use crate::wishlist::WishlistItemStatus;
    use crate::zones::{PurchasedItemRecord, ZoneDetailItem};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
    }

    fn detail_item(
        id: &str,
        status: WishlistItemStatus,
        deadline: Option<NaiveDate>,
    ) -> ZoneDetailItem {
        ZoneDetailItem {
            id: id.to_string(),
            name: format!("item {}", id),
            allocated_budget: dec!(100),
            amount_spent: dec!(0),
            must_purchase_before: deadline,
            status,
        }
    }

    fn record(
        id: &str,
        delivery: Option<NaiveDate>,
        installation: Option<NaiveDate>,
    ) -> PurchasedItemRecord {
        PurchasedItemRecord {
            id: id.to_string(),
            wishlist_item_id: format!("item-{}", id),
            item_name: format!("record {}", id),
            description: String::new(),
            budget: dec!(100),
            amount_spent: dec!(80),
            difference: dec!(20),
            purchase_date: None,
            delivery_date: delivery,
            installation_date: installation,
            contact_person_name: None,
            contact_person_email: None,
            contact_person_mobile: None,
            company_brand_name: None,
            delivery_scheduled: false,
            status: WishlistItemStatus::Completed,
        }
    }

    #[test]
    fn test_upcoming_fires_one_day_ahead() {
        let items = vec![detail_item(
            "a",
            WishlistItemStatus::NotStarted,
            Some(day(15)),
        )];

        let today = day(14);
        let notifications = date_notifications(&items, &[], today);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::Upcoming);
        assert_eq!(
            notifications[0].field,
            NotificationField::MustPurchaseBefore
        );
    }

    #[test]
    fn test_ids_use_the_field_key_not_the_label() {
        let items = vec![detail_item(
            "a",
            WishlistItemStatus::NotStarted,
            Some(day(15)),
        )];
        let records = vec![record("r1", Some(day(15)), Some(day(15)))];

        let notifications = date_notifications(&items, &records, day(15));
        let ids: Vec<&str> = notifications.iter().map(|n| n.id.as_str()).collect();
        assert!(ids.contains(&"a-mustPurchaseBefore"));
        assert!(ids.contains(&"r1-deliveryDate"));
        assert!(ids.contains(&"r1-installationDate"));
    }

    #[test]
    fn test_overdue_on_and_after_the_due_date() {
        let items = vec![detail_item(
            "a",
            WishlistItemStatus::NotStarted,
            Some(day(15)),
        )];

        for today in [day(15), day(20)] {
            let notifications = date_notifications(&items, &[], today);
            assert_eq!(notifications[0].kind, NotificationKind::Overdue);
        }
    }

    #[test]
    fn test_quiet_outside_the_window() {
        let items = vec![detail_item(
            "a",
            WishlistItemStatus::NotStarted,
            Some(day(15)),
        )];

        assert!(date_notifications(&items, &[], day(10)).is_empty());
    }

    #[test]
    fn test_actioned_item_suppresses_purchase_deadline() {
        let items = vec![detail_item(
            "a",
            WishlistItemStatus::InProgress,
            Some(day(15)),
        )];

        assert!(date_notifications(&items, &[], day(16)).is_empty());
    }

    #[test]
    fn test_delivery_and_installation_both_fire() {
        let records = vec![record("r1", Some(day(14)), Some(day(15)))];

        let notifications = date_notifications(&[], &records, day(15));
        assert_eq!(notifications.len(), 2);
        // sorted by due date, soonest first
        assert_eq!(notifications[0].field, NotificationField::DeliveryDate);
        assert_eq!(notifications[0].kind, NotificationKind::Overdue);
        assert_eq!(
            notifications[1].field,
            NotificationField::InstallationDate
        );
    }

    #[test]
    fn test_sorted_by_due_date() {
        let items = vec![
            detail_item("late", WishlistItemStatus::NotStarted, Some(day(20))),
            detail_item("soon", WishlistItemStatus::NotStarted, Some(day(16))),
        ];

        let notifications = date_notifications(&items, &[], day(25));
        assert_eq!(notifications[0].item_id, "soon");
        assert_eq!(notifications[1].item_id, "late");
    }

    #[test]
    fn test_no_dates_no_noise() {
        let items = vec![detail_item("a", WishlistItemStatus::NotStarted, None)];
        let records = vec![record("r1", None, None)];
        assert!(date_notifications(&items, &records, day(15)).is_empty());
    }
}
