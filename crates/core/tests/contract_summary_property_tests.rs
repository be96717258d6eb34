//! Property-based tests for the contract expense summary fold.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use renoplan_core::contracts::{
    ContractExpense, ContractExpenseRecord, ContractExpenseType, ContractPayment,
};
use renoplan_core::dashboard::{summarize_contract_expenses, ContractExpenseSummary};

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Strategy for a contract expense with an optional agreed total and a
/// handful of payments. Amounts are whole cents to keep arithmetic exact.
fn contract_expense_strategy() -> impl Strategy<Value = ContractExpense> {
    (
        proptest::option::of(0i64..5_000_000),
        prop::collection::vec(0i64..1_000_000, 0..8),
    )
        .prop_map(|(total_cents, payment_cents)| {
            let record = ContractExpenseRecord {
                id: "ce".to_string(),
                budget_id: "b".to_string(),
                expense_type: ContractExpenseType::RenovationCost,
                expense_name: "contract".to_string(),
                expense_date: None,
                notes: None,
                vendor_name: "vendor".to_string(),
                contract_total_amount: total_cents.map(|c| Decimal::new(c, 2)),
                created_at: ts(),
                updated_at: ts(),
            };
            let payments = payment_cents
                .into_iter()
                .enumerate()
                .map(|(i, cents)| ContractPayment {
                    id: format!("p{}", i),
                    contract_expense_id: "ce".to_string(),
                    amount: Decimal::new(cents, 2),
                    paid_at: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                    notes: None,
                    created_at: ts(),
                    updated_at: ts(),
                })
                .collect();
            ContractExpense::assemble(record, Vec::new(), payments)
        })
}

#[test]
fn prop_summary_counts_every_expense() {
    proptest!(|(expenses in prop::collection::vec(contract_expense_strategy(), 0..20))| {
        let summary = summarize_contract_expenses(&expenses);
        prop_assert_eq!(summary.expenses_count, expenses.len());
    });
}

#[test]
fn prop_summary_totals_are_component_sums() {
    proptest!(|(expenses in prop::collection::vec(contract_expense_strategy(), 0..20))| {
        let summary = summarize_contract_expenses(&expenses);

        let total: Decimal = expenses.iter().map(|e| e.total_contract_cost).sum();
        let paid: Decimal = expenses.iter().map(|e| e.paid_to_date).sum();

        prop_assert_eq!(summary.total_contract_cost, total);
        prop_assert_eq!(summary.paid_to_date, paid);
        prop_assert_eq!(summary.remaining_balance, total - paid);
    });
}

#[test]
fn prop_summary_fold_splits_anywhere() {
    proptest!(|(
        expenses in prop::collection::vec(contract_expense_strategy(), 0..20),
        split in 0usize..20
    )| {
        let split = split.min(expenses.len());
        let (left, right) = expenses.split_at(split);

        let combined =
            summarize_contract_expenses(left).combine(&summarize_contract_expenses(right));

        prop_assert_eq!(combined, summarize_contract_expenses(&expenses));
    });
}

#[test]
fn prop_empty_input_is_the_zero_summary() {
    let summary = summarize_contract_expenses(&[]);
    assert_eq!(summary, ContractExpenseSummary::default());
    assert_eq!(summary.total_contract_cost, Decimal::ZERO);
    assert_eq!(summary.expenses_count, 0);
}
