use crate::budgets::budgets_model::{
    Budget, BudgetMember, BudgetMemberUpsert, BudgetRole, NewBudget,
};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Lists budgets, newest first.
    fn list(&self) -> Result<Vec<Budget>>;
    fn find_by_id(&self, budget_id: &str) -> Result<Option<Budget>>;
    /// Most recently created budget, if any exist.
    fn latest(&self) -> Result<Option<Budget>>;
    async fn create(&self, new_budget: NewBudget) -> Result<Budget>;
    fn list_members(&self, budget_id: &str) -> Result<Vec<BudgetMember>>;
    fn member_role(&self, budget_id: &str, user_id: &str) -> Result<Option<BudgetRole>>;
    async fn upsert_member(&self, member: BudgetMemberUpsert) -> Result<BudgetMember>;
    async fn remove_member(&self, budget_id: String, user_id: String) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self) -> Result<Vec<Budget>>;
    fn get_budget(&self, budget_id: &str) -> Result<Option<Budget>>;
    fn get_latest_budget(&self) -> Result<Option<Budget>>;
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    fn get_budget_members(&self, budget_id: &str) -> Result<Vec<BudgetMember>>;
    fn get_member_role(&self, budget_id: &str, user_id: &str) -> Result<Option<BudgetRole>>;
    async fn upsert_budget_member(&self, member: BudgetMemberUpsert) -> Result<BudgetMember>;
    async fn remove_budget_member(&self, budget_id: String, user_id: String) -> Result<usize>;
}
