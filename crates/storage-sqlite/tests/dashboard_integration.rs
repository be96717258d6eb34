//! End-to-end tests through the SQLite repositories: seed a budget, read the
//! composed views back, and check cascade behavior.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use renoplan_core::budgets::{
    BudgetMemberUpsert, BudgetRepositoryTrait, BudgetRole, BudgetService, BudgetServiceTrait,
    NewBudget,
};
use renoplan_core::contracts::{
    ContractExpenseService, ContractExpenseType, ContractMilestoneInput, ContractPaymentInput,
    ContractServiceTrait, NewContractExpense,
};
use renoplan_core::dashboard::{DashboardService, DashboardServiceTrait};
use renoplan_core::expenses::{ExpenseRepositoryTrait, NewExpense};
use renoplan_core::schedule::{ScheduleService, ScheduleServiceTrait};
use renoplan_core::wishlist::{
    NewWishlistItem, ScheduleDatesInput, WishlistItemStatus, WishlistRepositoryTrait,
    WishlistService, WishlistServiceTrait,
};
use renoplan_core::zones::{NewZone, ZoneRepositoryTrait, ZoneService, ZoneServiceTrait};

use renoplan_storage_sqlite::budgets::BudgetRepository;
use renoplan_storage_sqlite::contracts::ContractRepository;
use renoplan_storage_sqlite::db;
use renoplan_storage_sqlite::expenses::ExpenseRepository;
use renoplan_storage_sqlite::wishlist::WishlistRepository;
use renoplan_storage_sqlite::zones::ZoneRepository;

struct TestContext {
    // Held so the database file outlives the repositories.
    _dir: TempDir,
    budget_repository: Arc<BudgetRepository>,
    zone_repository: Arc<ZoneRepository>,
    wishlist_repository: Arc<WishlistRepository>,
    expense_repository: Arc<ExpenseRepository>,
    contract_repository: Arc<ContractRepository>,
}

fn setup() -> TestContext {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("renoplan.db");
    let pool = db::init(db_path.to_str().expect("utf-8 path")).expect("init database");
    let writer = db::spawn_writer(pool.clone()).expect("spawn writer");

    TestContext {
        _dir: dir,
        budget_repository: Arc::new(BudgetRepository::new(pool.clone(), writer.clone())),
        zone_repository: Arc::new(ZoneRepository::new(pool.clone(), writer.clone())),
        wishlist_repository: Arc::new(WishlistRepository::new(pool.clone(), writer.clone())),
        expense_repository: Arc::new(ExpenseRepository::new(pool.clone(), writer.clone())),
        contract_repository: Arc::new(ContractRepository::new(pool, writer)),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_budget(ctx: &TestContext, name: &str) -> renoplan_core::budgets::Budget {
    let service = BudgetService::new(ctx.budget_repository.clone());
    service
        .create_budget(NewBudget {
            name: name.to_string(),
            total_budget: dec!(60000),
            currency: None,
            owner_user_id: "user-1".to_string(),
        })
        .await
        .expect("create budget")
}

#[tokio::test]
async fn test_dashboard_composition_from_seeded_budget() {
    let ctx = setup();
    let budget = seed_budget(&ctx, "Maple Road flat").await;
    assert_eq!(budget.currency, "SGD");

    let living = ctx
        .zone_repository
        .create(NewZone {
            budget_id: budget.id.clone(),
            name: "Living room".to_string(),
        })
        .await
        .unwrap();
    let kitchen = ctx
        .zone_repository
        .create(NewZone {
            budget_id: budget.id.clone(),
            name: "Kitchen".to_string(),
        })
        .await
        .unwrap();

    let sofa = ctx
        .wishlist_repository
        .create(NewWishlistItem {
            zone_id: living.id.clone(),
            name: "Sofa".to_string(),
            budget: dec!(1000),
            must_purchase_before: None,
        })
        .await
        .unwrap();
    let tv = ctx
        .wishlist_repository
        .create(NewWishlistItem {
            zone_id: living.id.clone(),
            name: "TV".to_string(),
            budget: dec!(2000),
            must_purchase_before: None,
        })
        .await
        .unwrap();
    // No budget earmarked and never acted on: shows up as unbudgeted.
    ctx.wishlist_repository
        .create(NewWishlistItem {
            zone_id: kitchen.id.clone(),
            name: "Oven".to_string(),
            budget: dec!(0),
            must_purchase_before: None,
        })
        .await
        .unwrap();

    for (item_id, amount) in [
        (sofa.id.clone(), dec!(800)),
        (tv.id.clone(), dec!(100)),
        (tv.id.clone(), dec!(150)),
    ] {
        ctx.expense_repository
            .create(NewExpense {
                wishlist_item_id: item_id,
                amount,
                description: None,
                expense_date: Some(date(2026, 2, 10)),
            })
            .await
            .unwrap();
    }
    ctx.wishlist_repository
        .update_status(sofa.id.clone(), WishlistItemStatus::Completed)
        .await
        .unwrap();
    ctx.wishlist_repository
        .update_status(tv.id.clone(), WishlistItemStatus::InProgress)
        .await
        .unwrap();

    let contract_service = Arc::new(ContractExpenseService::new(ctx.contract_repository.clone()));
    contract_service
        .create_contract_expense(NewContractExpense {
            budget_id: budget.id.clone(),
            expense_type: ContractExpenseType::RenovationCost,
            expense_name: "Carpentry package".to_string(),
            expense_date: Some(date(2026, 1, 20)),
            notes: None,
            vendor_name: "Oak & Pine".to_string(),
            contract_total_amount: Some(dec!(10000)),
            milestones: vec![ContractMilestoneInput {
                sequence_number: 1,
                percentage: Some(dec!(50)),
                amount: None,
                due_date: Some(date(2026, 3, 1)),
                notes: None,
            }],
            payments: vec![ContractPaymentInput {
                amount: dec!(4000),
                paid_at: date(2026, 2, 1),
                notes: None,
            }],
        })
        .await
        .unwrap();

    let dashboard_service = DashboardService::new(
        ctx.budget_repository.clone(),
        ctx.zone_repository.clone(),
        ctx.wishlist_repository.clone(),
        ctx.expense_repository.clone(),
        contract_service,
    );

    let dashboard = dashboard_service
        .get_dashboard(&budget.id)
        .unwrap()
        .expect("dashboard for seeded budget");

    assert_eq!(dashboard.budget.total_budget, dec!(60000));
    assert_eq!(dashboard.zones.len(), 2);

    let living_metrics = dashboard
        .zones
        .iter()
        .find(|z| z.id == living.id)
        .expect("living room metrics");
    assert_eq!(living_metrics.allocated_budget, dec!(3000));
    assert_eq!(living_metrics.amount_spent, dec!(1050));
    assert_eq!(living_metrics.items_purchased, 2);
    assert_eq!(living_metrics.items_left_to_purchase, 0);

    let kitchen_metrics = dashboard
        .zones
        .iter()
        .find(|z| z.id == kitchen.id)
        .expect("kitchen metrics");
    assert_eq!(kitchen_metrics.allocated_budget, dec!(0));
    assert_eq!(kitchen_metrics.items_purchased, 0);
    assert_eq!(kitchen_metrics.items_left_to_purchase, 1);

    assert_eq!(dashboard.unbudgeted_items, 1);

    let summary = &dashboard.contract_expense_summary;
    assert_eq!(summary.total_contract_cost, dec!(10000));
    assert_eq!(summary.paid_to_date, dec!(4000));
    assert_eq!(summary.remaining_balance, dec!(6000));
    assert_eq!(summary.expenses_count, 1);

    // The only budget is also the latest one.
    let latest = dashboard_service.get_latest_dashboard().unwrap().unwrap();
    assert_eq!(latest, dashboard);
}

#[tokio::test]
async fn test_zone_detail_and_delivery_schedule() {
    let ctx = setup();
    let budget = seed_budget(&ctx, "Bedroom refresh").await;

    let bedroom = ctx
        .zone_repository
        .create(NewZone {
            budget_id: budget.id.clone(),
            name: "Bedroom".to_string(),
        })
        .await
        .unwrap();

    let bed = ctx
        .wishlist_repository
        .create(NewWishlistItem {
            zone_id: bedroom.id.clone(),
            name: "Bed frame".to_string(),
            budget: dec!(1500),
            must_purchase_before: None,
        })
        .await
        .unwrap();
    let lamp = ctx
        .wishlist_repository
        .create(NewWishlistItem {
            zone_id: bedroom.id.clone(),
            name: "Lamp".to_string(),
            budget: dec!(120),
            must_purchase_before: None,
        })
        .await
        .unwrap();

    ctx.expense_repository
        .create(NewExpense {
            wishlist_item_id: bed.id.clone(),
            amount: dec!(1600),
            description: Some("King frame".to_string()),
            expense_date: Some(date(2026, 4, 2)),
        })
        .await
        .unwrap();
    ctx.wishlist_repository
        .update_status(bed.id.clone(), WishlistItemStatus::Completed)
        .await
        .unwrap();

    let wishlist_service =
        WishlistService::new(ctx.wishlist_repository.clone(), ctx.expense_repository.clone());
    wishlist_service
        .set_schedule_dates(
            bed.id.clone(),
            ScheduleDatesInput {
                delivery_date: Some(date(2026, 4, 20)),
                installation_date: Some(date(2026, 4, 21)),
                delivery_scheduled: true,
                contact_person_name: Some("Sam Lee".to_string()),
                contact_person_email: None,
                contact_person_mobile: Some("+65 8000 0000".to_string()),
                company_brand_name: Some("DreamRest".to_string()),
            },
        )
        .await
        .unwrap();

    let zone_service = ZoneService::new(
        ctx.zone_repository.clone(),
        ctx.budget_repository.clone(),
        ctx.wishlist_repository.clone(),
        ctx.expense_repository.clone(),
    );
    let detail = zone_service
        .get_zone_detail(&bedroom.id)
        .unwrap()
        .expect("zone detail");

    assert_eq!(detail.zone.currency, "SGD");
    assert_eq!(detail.allocated_budget, dec!(1620));
    assert_eq!(detail.amount_spent, dec!(1600));
    assert_eq!(detail.budget_left, dec!(20));
    assert_eq!(detail.purchased_items.len(), 1);
    assert_eq!(detail.unpurchased_items.len(), 1);
    assert_eq!(detail.unpurchased_items[0].id, lamp.id);

    assert_eq!(detail.purchased_item_records.len(), 1);
    let record = &detail.purchased_item_records[0];
    assert_eq!(record.wishlist_item_id, bed.id);
    assert_eq!(record.amount_spent, dec!(1600));
    assert_eq!(record.difference, dec!(-100));
    assert_eq!(record.delivery_date, Some(date(2026, 4, 20)));
    assert_eq!(record.installation_date, Some(date(2026, 4, 21)));
    assert!(record.delivery_scheduled);
    assert_eq!(record.contact_person_name.as_deref(), Some("Sam Lee"));

    let schedule_service =
        ScheduleService::new(ctx.zone_repository.clone(), ctx.wishlist_repository.clone());
    let schedule = schedule_service.get_delivery_schedule(&budget.id).unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].wishlist_item_id, bed.id);
    assert_eq!(schedule[0].zone_name, "Bedroom");
    assert_eq!(schedule[0].company_brand_name.as_deref(), Some("DreamRest"));

    // Clearing the installation date removes that event but keeps delivery.
    wishlist_service
        .set_schedule_dates(
            bed.id.clone(),
            ScheduleDatesInput {
                delivery_date: Some(date(2026, 4, 20)),
                installation_date: None,
                delivery_scheduled: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let schedule = schedule_service.get_delivery_schedule(&budget.id).unwrap();
    assert_eq!(schedule[0].delivery_date, Some(date(2026, 4, 20)));
    assert_eq!(schedule[0].installation_date, None);
}

#[tokio::test]
async fn test_member_roles_round_trip() {
    let ctx = setup();
    let budget = seed_budget(&ctx, "Shared loft").await;

    // The creator was recorded as owner.
    let role = ctx
        .budget_repository
        .member_role(&budget.id, "user-1")
        .unwrap();
    assert_eq!(role, Some(BudgetRole::Owner));

    let service = BudgetService::new(ctx.budget_repository.clone());
    service
        .upsert_budget_member(BudgetMemberUpsert {
            budget_id: budget.id.clone(),
            user_id: "user-2".to_string(),
            role: BudgetRole::Guest,
            invited_by: Some("user-1".to_string()),
        })
        .await
        .unwrap();
    // Re-roling the same user updates in place.
    service
        .upsert_budget_member(BudgetMemberUpsert {
            budget_id: budget.id.clone(),
            user_id: "user-2".to_string(),
            role: BudgetRole::Maintainer,
            invited_by: Some("user-1".to_string()),
        })
        .await
        .unwrap();

    let members = service.get_budget_members(&budget.id).unwrap();
    assert_eq!(members.len(), 2);
    let role = service.get_member_role(&budget.id, "user-2").unwrap();
    assert_eq!(role, Some(BudgetRole::Maintainer));

    let removed = service
        .remove_budget_member(budget.id.clone(), "user-2".to_string())
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(service.get_member_role(&budget.id, "user-2").unwrap(), None);
}

#[tokio::test]
async fn test_zone_delete_cascades_to_items_and_expenses() {
    let ctx = setup();
    let budget = seed_budget(&ctx, "Hallway").await;

    let zone = ctx
        .zone_repository
        .create(NewZone {
            budget_id: budget.id.clone(),
            name: "Hallway".to_string(),
        })
        .await
        .unwrap();
    let item = ctx
        .wishlist_repository
        .create(NewWishlistItem {
            zone_id: zone.id.clone(),
            name: "Shoe rack".to_string(),
            budget: dec!(200),
            must_purchase_before: None,
        })
        .await
        .unwrap();
    ctx.expense_repository
        .create(NewExpense {
            wishlist_item_id: item.id.clone(),
            amount: dec!(180),
            description: None,
            expense_date: None,
        })
        .await
        .unwrap();

    let deleted = ctx.zone_repository.delete(zone.id.clone()).await.unwrap();
    assert_eq!(deleted, 1);

    assert!(ctx
        .wishlist_repository
        .list_by_budget(&budget.id)
        .unwrap()
        .is_empty());
    assert!(ctx
        .expense_repository
        .list_by_budget(&budget.id)
        .unwrap()
        .is_empty());
    assert_eq!(ctx.expense_repository.count_for_item(&item.id).unwrap(), 0);
}

#[tokio::test]
async fn test_expense_deletion_resets_item_status() {
    let ctx = setup();
    let budget = seed_budget(&ctx, "Study").await;
    let zone = ctx
        .zone_repository
        .create(NewZone {
            budget_id: budget.id.clone(),
            name: "Study".to_string(),
        })
        .await
        .unwrap();
    let desk = ctx
        .wishlist_repository
        .create(NewWishlistItem {
            zone_id: zone.id.clone(),
            name: "Desk".to_string(),
            budget: dec!(400),
            must_purchase_before: None,
        })
        .await
        .unwrap();

    let expense = ctx
        .expense_repository
        .create(NewExpense {
            wishlist_item_id: desk.id.clone(),
            amount: dec!(350),
            description: None,
            expense_date: None,
        })
        .await
        .unwrap();
    ctx.wishlist_repository
        .update_status(desk.id.clone(), WishlistItemStatus::Completed)
        .await
        .unwrap();

    ctx.expense_repository.delete(expense.id).await.unwrap();

    let wishlist_service =
        WishlistService::new(ctx.wishlist_repository.clone(), ctx.expense_repository.clone());
    wishlist_service
        .reset_status_if_no_expenses(desk.id.clone())
        .await
        .unwrap();

    let desk = ctx
        .wishlist_repository
        .find_by_id(&desk.id)
        .unwrap()
        .expect("desk still exists");
    assert_eq!(desk.status, WishlistItemStatus::NotStarted);
}
