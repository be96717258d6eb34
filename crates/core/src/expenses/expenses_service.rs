use std::sync::Arc;

use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::Result;
use crate::utils::text::sanitize_optional_text;

/// Service for recording and correcting expenses.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses_by_budget(&self, budget_id: &str) -> Result<Vec<Expense>> {
        self.repository.list_by_budget(budget_id)
    }

    async fn create_expense(&self, mut new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        new_expense.description = sanitize_optional_text(new_expense.description);
        self.repository.create(new_expense).await
    }

    async fn update_expense(&self, mut update: ExpenseUpdate) -> Result<Expense> {
        update.validate()?;
        update.description = sanitize_optional_text(update.description);
        self.repository.update(update).await
    }

    async fn delete_expense(&self, expense_id: String) -> Result<usize> {
        self.repository.delete(expense_id).await
    }
}
