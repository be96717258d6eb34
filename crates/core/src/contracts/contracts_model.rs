//! Contract expense domain models.
//!
//! A contract expense tracks a vendor contract outside the wishlist flow:
//! an optional agreed total, a set of payment milestones (by percentage or
//! fixed amount), and the payments actually made. The derived figures
//! (total cost, paid to date, remaining balance) are assembled here rather
//! than read from the store.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::utils::text::{sanitize_optional_text, sanitize_required_text};
use crate::{errors::ValidationError, Error, Result};

/// Category of a contract expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractExpenseType {
    RenovationCost,
    VariationOrder,
    ExternalService,
}

impl ContractExpenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractExpenseType::RenovationCost => "renovation_cost",
            ContractExpenseType::VariationOrder => "variation_order",
            ContractExpenseType::ExternalService => "external_service",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "renovation_cost" => Some(ContractExpenseType::RenovationCost),
            "variation_order" => Some(ContractExpenseType::VariationOrder),
            "external_service" => Some(ContractExpenseType::ExternalService),
            _ => None,
        }
    }
}

/// Persisted base row of a contract expense, before derivation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractExpenseRecord {
    pub id: String,
    pub budget_id: String,
    pub expense_type: ContractExpenseType,
    pub expense_name: String,
    pub expense_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub vendor_name: String,
    pub contract_total_amount: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A planned partial payment, by percentage of the contract total or a
/// fixed amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractMilestone {
    pub id: String,
    pub contract_expense_id: String,
    pub sequence_number: i32,
    pub percentage: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ContractMilestone {
    /// Money this milestone represents: the fixed amount when given,
    /// otherwise the percentage applied to the explicit contract total.
    pub fn effective_amount(&self, contract_total: Option<Decimal>) -> Decimal {
        if let Some(amount) = self.amount {
            return amount;
        }
        match (self.percentage, contract_total) {
            (Some(pct), Some(total)) => total * pct / dec!(100),
            _ => Decimal::ZERO,
        }
    }
}

/// A payment actually made against a contract expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayment {
    pub id: String,
    pub contract_expense_id: String,
    pub amount: Decimal,
    pub paid_at: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A contract expense with children and derived figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractExpense {
    pub id: String,
    pub budget_id: String,
    pub expense_type: ContractExpenseType,
    pub expense_name: String,
    pub expense_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub vendor_name: String,
    pub contract_total_amount: Option<Decimal>,
    pub milestone_total_amount: Decimal,
    pub paid_to_date: Decimal,
    pub total_contract_cost: Decimal,
    /// May be negative when payments exceed the contract cost.
    pub remaining_balance: Decimal,
    pub milestones: Vec<ContractMilestone>,
    pub payments: Vec<ContractPayment>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ContractExpense {
    /// Assembles the full contract expense from its parts.
    ///
    /// The explicit contract total wins as the total cost; absent one, the
    /// milestone total stands in for it.
    pub fn assemble(
        record: ContractExpenseRecord,
        milestones: Vec<ContractMilestone>,
        payments: Vec<ContractPayment>,
    ) -> Self {
        let milestone_total_amount: Decimal = milestones
            .iter()
            .map(|m| m.effective_amount(record.contract_total_amount))
            .sum();
        let paid_to_date: Decimal = payments.iter().map(|p| p.amount).sum();
        let total_contract_cost = record
            .contract_total_amount
            .unwrap_or(milestone_total_amount);

        ContractExpense {
            id: record.id,
            budget_id: record.budget_id,
            expense_type: record.expense_type,
            expense_name: record.expense_name,
            expense_date: record.expense_date,
            notes: record.notes,
            vendor_name: record.vendor_name,
            contract_total_amount: record.contract_total_amount,
            milestone_total_amount,
            paid_to_date,
            total_contract_cost,
            remaining_balance: total_contract_cost - paid_to_date,
            milestones,
            payments,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Milestone input as entered in the contract dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMilestoneInput {
    pub sequence_number: i32,
    #[serde(default, deserialize_with = "crate::utils::money::deserialize_optional_amount")]
    pub percentage: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::utils::money::deserialize_optional_amount")]
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Payment input as entered in the contract dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPaymentInput {
    #[serde(deserialize_with = "crate::utils::money::deserialize_amount")]
    pub amount: Decimal,
    pub paid_at: NaiveDate,
    pub notes: Option<String>,
}

/// Input model for creating or replacing a contract expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContractExpense {
    pub budget_id: String,
    pub expense_type: ContractExpenseType,
    pub expense_name: String,
    pub expense_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub vendor_name: String,
    #[serde(default, deserialize_with = "crate::utils::money::deserialize_optional_amount")]
    pub contract_total_amount: Option<Decimal>,
    pub milestones: Vec<ContractMilestoneInput>,
    pub payments: Vec<ContractPaymentInput>,
}

impl NewContractExpense {
    /// Trims text fields and drops unusable child rows: milestones need a
    /// positive sequence number and either a percentage or an amount;
    /// payments need a non-negative amount.
    pub fn sanitize(&mut self) -> Result<()> {
        self.expense_name = sanitize_required_text(&self.expense_name, "Expense name")?;
        self.vendor_name = sanitize_required_text(&self.vendor_name, "Vendor name")?;
        self.notes = sanitize_optional_text(self.notes.take());

        self.milestones.retain(|m| {
            m.sequence_number > 0 && (m.percentage.is_some() || m.amount.is_some())
        });
        for milestone in &mut self.milestones {
            milestone.notes = sanitize_optional_text(milestone.notes.take());
        }

        self.payments.retain(|p| p.amount >= Decimal::ZERO);
        for payment in &mut self.payments {
            payment.notes = sanitize_optional_text(payment.notes.take());
        }
        Ok(())
    }

    /// A contract expense is only valid with at least one actual payment.
    pub fn validate(&self) -> Result<()> {
        if self.payments.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "At least one actual payment is required".to_string(),
            )));
        }
        Ok(())
    }
}
