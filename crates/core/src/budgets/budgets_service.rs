use log::debug;
use std::sync::Arc;

use super::budgets_model::{Budget, BudgetMember, BudgetMemberUpsert, BudgetRole, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;

/// Service for managing budgets and their members.
///
/// Callers resolve the acting user themselves and pass ids in explicitly;
/// the service holds no ambient selection state.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budgets(&self) -> Result<Vec<Budget>> {
        self.repository.list()
    }

    fn get_budget(&self, budget_id: &str) -> Result<Option<Budget>> {
        self.repository.find_by_id(budget_id)
    }

    fn get_latest_budget(&self) -> Result<Option<Budget>> {
        self.repository.latest()
    }

    /// Creates a budget and records its creator as the owning member.
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;
        debug!("Creating budget '{}'", new_budget.name);

        let owner_user_id = new_budget.owner_user_id.clone();
        let budget = self.repository.create(new_budget).await?;

        self.repository
            .upsert_member(BudgetMemberUpsert {
                budget_id: budget.id.clone(),
                user_id: owner_user_id,
                role: BudgetRole::Owner,
                invited_by: None,
            })
            .await?;

        Ok(budget)
    }

    fn get_budget_members(&self, budget_id: &str) -> Result<Vec<BudgetMember>> {
        self.repository.list_members(budget_id)
    }

    fn get_member_role(&self, budget_id: &str, user_id: &str) -> Result<Option<BudgetRole>> {
        self.repository.member_role(budget_id, user_id)
    }

    async fn upsert_budget_member(&self, member: BudgetMemberUpsert) -> Result<BudgetMember> {
        debug!(
            "Upserting member {} on budget {} as {}",
            member.user_id,
            member.budget_id,
            member.role.as_str()
        );
        self.repository.upsert_member(member).await
    }

    async fn remove_budget_member(&self, budget_id: String, user_id: String) -> Result<usize> {
        self.repository.remove_member(budget_id, user_id).await
    }
}
