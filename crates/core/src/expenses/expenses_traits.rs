use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use async_trait::async_trait;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Every expense recorded under a budget, newest first.
    fn list_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>>;
    fn list_for_items(&self, item_ids: &[String]) -> Result<Vec<Expense>>;
    fn count_for_item(&self, item_id: &str) -> Result<i64>;
    async fn create(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update(&self, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete(&self, expense_id: String) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>>;
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: String) -> Result<usize>;
}
