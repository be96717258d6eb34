use log::debug;
use std::sync::Arc;

use super::aggregator::compose_dashboard;
use super::dashboard_model::BudgetDashboardData;
use crate::budgets::BudgetRepositoryTrait;
use crate::contracts::ContractServiceTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::wishlist::WishlistRepositoryTrait;
use crate::zones::ZoneRepositoryTrait;

/// Trait for dashboard service operations
pub trait DashboardServiceTrait: Send + Sync {
    /// Dashboard for one budget; None when the budget row is absent.
    fn get_dashboard(&self, budget_id: &str) -> Result<Option<BudgetDashboardData>>;
    /// Dashboard for the most recently created budget, if any.
    fn get_latest_dashboard(&self) -> Result<Option<BudgetDashboardData>>;
}

/// Composes the budget dashboard from repository snapshots.
///
/// The caller resolves which budget is selected and passes its id in;
/// this service reads no ambient selection state.
pub struct DashboardService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    zone_repository: Arc<dyn ZoneRepositoryTrait>,
    wishlist_repository: Arc<dyn WishlistRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    contract_service: Arc<dyn ContractServiceTrait>,
}

impl DashboardService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        zone_repository: Arc<dyn ZoneRepositoryTrait>,
        wishlist_repository: Arc<dyn WishlistRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        contract_service: Arc<dyn ContractServiceTrait>,
    ) -> Self {
        Self {
            budget_repository,
            zone_repository,
            wishlist_repository,
            expense_repository,
            contract_service,
        }
    }

    fn build(&self, budget: crate::budgets::Budget) -> Result<BudgetDashboardData> {
        debug!("Composing dashboard for budget {}", budget.id);
        let zones = self.zone_repository.list_by_budget(&budget.id)?;
        let items = self.wishlist_repository.list_by_budget(&budget.id)?;
        let expenses = self.expense_repository.list_by_budget(&budget.id)?;
        let contract_expenses = self.contract_service.get_contract_expenses(&budget.id)?;

        Ok(compose_dashboard(
            &budget,
            &zones,
            &items,
            &expenses,
            &contract_expenses,
        ))
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, budget_id: &str) -> Result<Option<BudgetDashboardData>> {
        match self.budget_repository.find_by_id(budget_id)? {
            Some(budget) => Ok(Some(self.build(budget)?)),
            None => Ok(None),
        }
    }

    fn get_latest_dashboard(&self) -> Result<Option<BudgetDashboardData>> {
        match self.budget_repository.latest()? {
            Some(budget) => Ok(Some(self.build(budget)?)),
            None => Ok(None),
        }
    }
}
