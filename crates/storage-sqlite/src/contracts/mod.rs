//! SQLite storage implementation for contract expenses, milestones, and payments.

mod model;
mod repository;

pub use model::{ContractExpenseDB, ContractMilestoneDB, ContractPaymentDB};
pub use repository::ContractRepository;
