//! Contract expenses module - vendor contracts with milestones and payments.

mod contracts_model;
#[cfg(test)]
mod contracts_model_tests;
mod contracts_service;
mod contracts_traits;

pub use contracts_model::{
    ContractExpense, ContractExpenseRecord, ContractExpenseType, ContractMilestone,
    ContractMilestoneInput, ContractPayment, ContractPaymentInput, NewContractExpense,
};
pub use contracts_service::ContractExpenseService;
pub use contracts_traits::{ContractRepositoryTrait, ContractServiceTrait};
