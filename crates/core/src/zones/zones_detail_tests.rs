//! Tests for the zone detail aggregation.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::expenses::Expense;
    use crate::wishlist::{ScheduleEvent, ScheduleEventKind, WishlistItem, WishlistItemStatus};
    use crate::zones::{build_zone_detail, Zone};

    fn ts() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn zone() -> Zone {
        Zone {
            id: "zone-1".to_string(),
            budget_id: "budget-1".to_string(),
            name: "Living room".to_string(),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn item(id: &str, budget: Decimal, status: WishlistItemStatus) -> WishlistItem {
        WishlistItem {
            id: id.to_string(),
            zone_id: "zone-1".to_string(),
            name: format!("item {}", id),
            budget,
            status,
            must_purchase_before: None,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn expense(id: &str, item_id: &str, amount: Decimal) -> Expense {
        Expense {
            id: id.to_string(),
            wishlist_item_id: item_id.to_string(),
            amount,
            description: Some("  receipt  ".to_string()),
            expense_date: NaiveDate::from_ymd_opt(2026, 2, 10),
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[test]
    fn test_totals_and_budget_left() {
        let items = vec![
            item("a", dec!(100), WishlistItemStatus::NotStarted),
            item("b", dec!(50), WishlistItemStatus::Completed),
        ];
        let expenses = vec![expense("e1", "b", dec!(40))];

        let detail = build_zone_detail(&zone(), "SGD", &items, &expenses, &[]);

        assert_eq!(detail.allocated_budget, dec!(150));
        assert_eq!(detail.amount_spent, dec!(40));
        assert_eq!(detail.budget_left, dec!(110));
        assert_eq!(detail.zone.currency, "SGD");
    }

    #[test]
    fn test_purchase_state_split() {
        let items = vec![
            item("a", dec!(100), WishlistItemStatus::NotStarted),
            item("b", dec!(50), WishlistItemStatus::InProgress),
            item("c", dec!(75), WishlistItemStatus::Completed),
        ];

        let detail = build_zone_detail(&zone(), "SGD", &items, &[], &[]);

        assert_eq!(detail.purchased_items.len(), 2);
        assert_eq!(detail.unpurchased_items.len(), 1);
        assert_eq!(detail.unpurchased_items[0].id, "a");
    }

    #[test]
    fn test_one_record_per_expense_of_purchased_items() {
        let items = vec![
            item("a", dec!(100), WishlistItemStatus::NotStarted),
            item("b", dec!(50), WishlistItemStatus::Completed),
        ];
        let expenses = vec![
            expense("e1", "b", dec!(30)),
            expense("e2", "b", dec!(25)),
            // expense against an unpurchased item yields no record
            expense("e3", "a", dec!(10)),
        ];

        let detail = build_zone_detail(&zone(), "SGD", &items, &expenses, &[]);

        assert_eq!(detail.purchased_item_records.len(), 2);
        let second = &detail.purchased_item_records[1];
        assert_eq!(second.amount_spent, dec!(25));
        assert_eq!(second.difference, dec!(25));
        assert_eq!(second.description, "receipt");
    }

    #[test]
    fn test_overspend_difference_goes_negative() {
        let items = vec![item("b", dec!(50), WishlistItemStatus::Completed)];
        let expenses = vec![expense("e1", "b", dec!(80))];

        let detail = build_zone_detail(&zone(), "SGD", &items, &expenses, &[]);

        assert_eq!(detail.purchased_item_records[0].difference, dec!(-30));
        assert_eq!(detail.budget_left, dec!(-30));
    }

    #[test]
    fn test_schedule_events_fold_into_records() {
        let items = vec![item("b", dec!(50), WishlistItemStatus::Completed)];
        let expenses = vec![expense("e1", "b", dec!(40))];
        let events = vec![
            ScheduleEvent {
                wishlist_item_id: "b".to_string(),
                kind: ScheduleEventKind::Delivery,
                scheduled_at: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                delivery_scheduled: true,
                contact_person_name: Some("Sam".to_string()),
                contact_person_email: None,
                contact_person_mobile: None,
                company_brand_name: Some("Acme".to_string()),
            },
            ScheduleEvent {
                wishlist_item_id: "b".to_string(),
                kind: ScheduleEventKind::Installation,
                scheduled_at: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
                delivery_scheduled: false,
                contact_person_name: None,
                contact_person_email: None,
                contact_person_mobile: None,
                company_brand_name: None,
            },
        ];

        let detail = build_zone_detail(&zone(), "SGD", &items, &expenses, &events);

        let record = &detail.purchased_item_records[0];
        assert_eq!(
            record.delivery_date,
            NaiveDate::from_ymd_opt(2026, 3, 1)
        );
        assert_eq!(
            record.installation_date,
            NaiveDate::from_ymd_opt(2026, 3, 5)
        );
        assert!(record.delivery_scheduled);
        assert_eq!(record.contact_person_name.as_deref(), Some("Sam"));
        assert_eq!(record.company_brand_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_empty_zone() {
        let detail = build_zone_detail(&zone(), "SGD", &[], &[], &[]);
        assert_eq!(detail.allocated_budget, Decimal::ZERO);
        assert_eq!(detail.amount_spent, Decimal::ZERO);
        assert!(detail.purchased_items.is_empty());
        assert!(detail.unpurchased_items.is_empty());
        assert!(detail.purchased_item_records.is_empty());
    }
}
