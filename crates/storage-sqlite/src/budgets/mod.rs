//! SQLite storage implementation for budgets and their members.

mod model;
mod repository;

pub use model::{BudgetDB, BudgetMemberDB};
pub use repository::BudgetRepository;
