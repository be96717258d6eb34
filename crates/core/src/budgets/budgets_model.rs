//! Budget domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a renovation budget (a "project").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub total_budget: Decimal,
    pub currency: String,
    pub owner_user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub name: String,
    #[serde(deserialize_with = "crate::utils::money::deserialize_amount")]
    pub total_budget: Decimal,
    /// Falls back to the default currency when absent.
    pub currency: Option<String>,
    pub owner_user_id: String,
}

impl NewBudget {
    /// Validates the new budget data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Budget name is required".to_string(),
            )));
        }
        if self.total_budget < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Total budget must be at least 0".to_string(),
            )));
        }
        if self.owner_user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ownerUserId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Collaboration role a user holds on a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRole {
    Owner,
    Admin,
    Maintainer,
    Guest,
}

impl BudgetRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRole::Owner => "owner",
            BudgetRole::Admin => "admin",
            BudgetRole::Maintainer => "maintainer",
            BudgetRole::Guest => "guest",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(BudgetRole::Owner),
            "admin" => Some(BudgetRole::Admin),
            "maintainer" => Some(BudgetRole::Maintainer),
            "guest" => Some(BudgetRole::Guest),
            _ => None,
        }
    }

    /// Owners and admins may invite, promote, or remove members.
    pub fn can_manage_members(&self) -> bool {
        matches!(self, BudgetRole::Owner | BudgetRole::Admin)
    }

    /// Everyone but guests may create and edit records.
    pub fn can_edit(&self) -> bool {
        !matches!(self, BudgetRole::Guest)
    }

    pub fn is_read_only(&self) -> bool {
        !self.can_edit()
    }
}

/// Membership record linking a user to a budget with a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetMember {
    pub budget_id: String,
    pub user_id: String,
    pub role: BudgetRole,
    pub invited_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for adding or re-roling a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetMemberUpsert {
    pub budget_id: String,
    pub user_id: String,
    pub role: BudgetRole,
    pub invited_by: Option<String>,
}
