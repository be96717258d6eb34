//! Dashboard module - the budget summary aggregation core.
//!
//! Everything here is pure and synchronous: the functions read snapshots and
//! allocate new derived values, so they are safe to call from any context.

mod aggregator;
mod dashboard_model;
mod dashboard_service;

pub use aggregator::{
    compose_dashboard, expense_totals_by_item, summarize_contract_expenses,
    unbudgeted_item_count, zone_dashboard_metrics,
};
pub use dashboard_model::{
    BudgetDashboardData, BudgetDashboardSummary, ContractExpenseSummary, ZoneDashboardMetrics,
};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};
