//! Budget summary aggregation.
//!
//! Straight-line folds over read snapshots. The aggregators assume their
//! inputs are internally consistent by id-reference and do not validate
//! referential integrity: an item whose zone id matches no zone in the
//! snapshot falls into no bucket.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::budgets::Budget;
use crate::contracts::ContractExpense;
use crate::expenses::Expense;
use crate::wishlist::WishlistItem;
use crate::zones::Zone;

use super::dashboard_model::{
    BudgetDashboardData, BudgetDashboardSummary, ContractExpenseSummary, ZoneDashboardMetrics,
};

/// Sums expense amounts per wishlist item id.
pub fn expense_totals_by_item(expenses: &[Expense]) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for expense in expenses {
        *totals
            .entry(expense.wishlist_item_id.clone())
            .or_insert(Decimal::ZERO) += expense.amount;
    }
    totals
}

/// Derives the per-zone metrics for a budget.
///
/// Output order follows the zones slice. The purchased/left split floors at
/// zero so a status/count desync from the store can never go negative.
pub fn zone_dashboard_metrics(
    zones: &[Zone],
    items: &[WishlistItem],
    expenses: &[Expense],
) -> Vec<ZoneDashboardMetrics> {
    let expense_totals = expense_totals_by_item(expenses);

    let mut items_by_zone: HashMap<&str, Vec<&WishlistItem>> = HashMap::new();
    for item in items {
        items_by_zone
            .entry(item.zone_id.as_str())
            .or_default()
            .push(item);
    }

    zones
        .iter()
        .map(|zone| {
            let zone_items = items_by_zone
                .get(zone.id.as_str())
                .map(|v| v.as_slice())
                .unwrap_or(&[]);

            let allocated_budget: Decimal = zone_items.iter().map(|item| item.budget).sum();
            let amount_spent: Decimal = zone_items
                .iter()
                .map(|item| {
                    expense_totals
                        .get(&item.id)
                        .copied()
                        .unwrap_or(Decimal::ZERO)
                })
                .sum();
            let items_purchased = zone_items
                .iter()
                .filter(|item| item.status.is_purchased())
                .count();

            ZoneDashboardMetrics {
                id: zone.id.clone(),
                name: zone.name.clone(),
                allocated_budget,
                amount_spent,
                items_purchased,
                items_left_to_purchase: zone_items.len().saturating_sub(items_purchased),
            }
        })
        .collect()
}

/// Counts items that have neither been acted on nor had money earmarked:
/// status still `NotStarted` and an allocated budget of zero.
pub fn unbudgeted_item_count(items: &[WishlistItem]) -> usize {
    items
        .iter()
        .filter(|item| !item.status.is_purchased() && item.budget == Decimal::ZERO)
        .count()
}

/// Folds contract expenses into one summary, starting from the zero value.
/// Zero rows yield the zero summary, not an absence value.
pub fn summarize_contract_expenses(expenses: &[ContractExpense]) -> ContractExpenseSummary {
    let mut summary = ContractExpenseSummary::default();
    for expense in expenses {
        summary.add(expense);
    }
    summary
}

/// Combines the aggregates into one dashboard value for a budget.
///
/// Resolving the budget row is the caller's concern; by the time this runs
/// the budget exists.
pub fn compose_dashboard(
    budget: &Budget,
    zones: &[Zone],
    items: &[WishlistItem],
    expenses: &[Expense],
    contract_expenses: &[ContractExpense],
) -> BudgetDashboardData {
    BudgetDashboardData {
        budget: BudgetDashboardSummary {
            id: budget.id.clone(),
            name: budget.name.clone(),
            total_budget: budget.total_budget,
            currency: budget.currency.clone(),
        },
        zones: zone_dashboard_metrics(zones, items, expenses),
        unbudgeted_items: unbudgeted_item_count(items),
        contract_expense_summary: summarize_contract_expenses(contract_expenses),
    }
}
