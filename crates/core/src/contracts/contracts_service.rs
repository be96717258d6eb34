use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::contracts_model::{
    ContractExpense, ContractExpenseRecord, ContractMilestone, ContractPayment,
    NewContractExpense,
};
use super::contracts_traits::{ContractRepositoryTrait, ContractServiceTrait};
use crate::dashboard::{summarize_contract_expenses, ContractExpenseSummary};
use crate::errors::Result;

/// Service for contract expenses; owns the assembly of derived figures.
pub struct ContractExpenseService {
    repository: Arc<dyn ContractRepositoryTrait>,
}

impl ContractExpenseService {
    pub fn new(repository: Arc<dyn ContractRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn assemble_all(&self, records: Vec<ContractExpenseRecord>) -> Result<Vec<ContractExpense>> {
        let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();

        let mut milestones_by_id: HashMap<String, Vec<ContractMilestone>> = HashMap::new();
        for milestone in self.repository.list_milestones_for(&ids)? {
            milestones_by_id
                .entry(milestone.contract_expense_id.clone())
                .or_default()
                .push(milestone);
        }

        let mut payments_by_id: HashMap<String, Vec<ContractPayment>> = HashMap::new();
        for payment in self.repository.list_payments_for(&ids)? {
            payments_by_id
                .entry(payment.contract_expense_id.clone())
                .or_default()
                .push(payment);
        }

        Ok(records
            .into_iter()
            .map(|record| {
                let milestones = milestones_by_id.remove(&record.id).unwrap_or_default();
                let payments = payments_by_id.remove(&record.id).unwrap_or_default();
                ContractExpense::assemble(record, milestones, payments)
            })
            .collect())
    }

    fn assemble_one(&self, record: ContractExpenseRecord) -> Result<ContractExpense> {
        let ids = vec![record.id.clone()];
        let milestones = self.repository.list_milestones_for(&ids)?;
        let payments = self.repository.list_payments_for(&ids)?;
        Ok(ContractExpense::assemble(record, milestones, payments))
    }
}

#[async_trait::async_trait]
impl ContractServiceTrait for ContractExpenseService {
    fn get_contract_expenses(&self, budget_id: &str) -> Result<Vec<ContractExpense>> {
        let records = self.repository.list_records_by_budget(budget_id)?;
        self.assemble_all(records)
    }

    fn get_budget_summary(&self, budget_id: &str) -> Result<ContractExpenseSummary> {
        let expenses = self.get_contract_expenses(budget_id)?;
        Ok(summarize_contract_expenses(&expenses))
    }

    async fn create_contract_expense(
        &self,
        mut input: NewContractExpense,
    ) -> Result<ContractExpense> {
        input.sanitize()?;
        input.validate()?;
        debug!(
            "Creating contract expense '{}' on budget {}",
            input.expense_name, input.budget_id
        );
        let record = self.repository.create(input).await?;
        self.assemble_one(record)
    }

    async fn update_contract_expense(
        &self,
        contract_expense_id: String,
        mut input: NewContractExpense,
    ) -> Result<ContractExpense> {
        input.sanitize()?;
        input.validate()?;
        let record = self.repository.update(contract_expense_id, input).await?;
        self.assemble_one(record)
    }

    async fn delete_contract_expense(&self, contract_expense_id: String) -> Result<usize> {
        self.repository.delete(contract_expense_id).await
    }
}
