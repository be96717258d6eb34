use crate::contracts::contracts_model::{
    ContractExpense, ContractExpenseRecord, ContractMilestone, ContractPayment,
    NewContractExpense,
};
use crate::dashboard::ContractExpenseSummary;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for contract expense repository operations
#[async_trait]
pub trait ContractRepositoryTrait: Send + Sync {
    /// Base rows for a budget, most recent expense date first, then most
    /// recently created.
    fn list_records_by_budget(&self, budget_id: &str) -> Result<Vec<ContractExpenseRecord>>;
    fn find_record_by_id(&self, contract_expense_id: &str)
        -> Result<Option<ContractExpenseRecord>>;
    /// Milestones for a set of contract expenses, ordered by sequence number.
    fn list_milestones_for(&self, contract_expense_ids: &[String])
        -> Result<Vec<ContractMilestone>>;
    /// Payments for a set of contract expenses, ordered by paid-at date.
    fn list_payments_for(&self, contract_expense_ids: &[String]) -> Result<Vec<ContractPayment>>;
    /// Inserts the expense and its children in one transaction.
    async fn create(&self, input: NewContractExpense) -> Result<ContractExpenseRecord>;
    /// Updates the base row and replaces all children in one transaction.
    async fn update(
        &self,
        contract_expense_id: String,
        input: NewContractExpense,
    ) -> Result<ContractExpenseRecord>;
    async fn delete(&self, contract_expense_id: String) -> Result<usize>;
}

/// Trait for contract expense service operations
#[async_trait]
pub trait ContractServiceTrait: Send + Sync {
    fn get_contract_expenses(&self, budget_id: &str) -> Result<Vec<ContractExpense>>;
    fn get_budget_summary(&self, budget_id: &str) -> Result<ContractExpenseSummary>;
    async fn create_contract_expense(&self, input: NewContractExpense) -> Result<ContractExpense>;
    async fn update_contract_expense(
        &self,
        contract_expense_id: String,
        input: NewContractExpense,
    ) -> Result<ContractExpense>;
    async fn delete_contract_expense(&self, contract_expense_id: String) -> Result<usize>;
}
