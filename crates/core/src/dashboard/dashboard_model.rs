//! Derived dashboard value objects. None of these are persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contracts::ContractExpense;

/// Budget header as shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDashboardSummary {
    pub id: String,
    pub name: String,
    pub total_budget: Decimal,
    pub currency: String,
}

/// Aggregated figures for one zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDashboardMetrics {
    pub id: String,
    pub name: String,
    pub allocated_budget: Decimal,
    pub amount_spent: Decimal,
    pub items_purchased: usize,
    pub items_left_to_purchase: usize,
}

/// Rolled-up contract figures for a whole budget.
///
/// The zero value is meaningful: a budget without contract expenses
/// summarizes to all zeros, never to an absence value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractExpenseSummary {
    pub total_contract_cost: Decimal,
    pub paid_to_date: Decimal,
    pub remaining_balance: Decimal,
    pub expenses_count: usize,
}

impl ContractExpenseSummary {
    /// Folds one contract expense into the running totals.
    pub fn add(&mut self, expense: &ContractExpense) {
        self.total_contract_cost += expense.total_contract_cost;
        self.paid_to_date += expense.paid_to_date;
        self.remaining_balance += expense.remaining_balance;
        self.expenses_count += 1;
    }

    /// Merges two partial summaries. The fold is associative and
    /// commutative, so partial summaries combine in any order.
    pub fn combine(mut self, other: &ContractExpenseSummary) -> Self {
        self.total_contract_cost += other.total_contract_cost;
        self.paid_to_date += other.paid_to_date;
        self.remaining_balance += other.remaining_balance;
        self.expenses_count += other.expenses_count;
        self
    }
}

/// The composed dashboard for one budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDashboardData {
    pub budget: BudgetDashboardSummary,
    pub zones: Vec<ZoneDashboardMetrics>,
    pub unbudgeted_items: usize,
    pub contract_expense_summary: ContractExpenseSummary,
}
