//! Expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A recorded purchase against a wishlist item. Several expenses may
/// reference the same item; aggregation sums all of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub wishlist_item_id: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub expense_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for recording an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub wishlist_item_id: String,
    #[serde(deserialize_with = "crate::utils::money::deserialize_amount")]
    pub amount: Decimal,
    pub description: Option<String>,
    pub expense_date: Option<NaiveDate>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)
    }
}

/// Input model for correcting a recorded expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub id: String,
    pub wishlist_item_id: String,
    #[serde(deserialize_with = "crate::utils::money::deserialize_amount")]
    pub amount: Decimal,
    pub description: Option<String>,
    pub expense_date: Option<NaiveDate>,
}

impl ExpenseUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)
    }
}

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Expense amount must be at least 0".to_string(),
        )));
    }
    Ok(())
}
