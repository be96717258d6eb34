//! Expenses module - money actually spent against wishlist items.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{Expense, ExpenseUpdate, NewExpense};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
