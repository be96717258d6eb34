//! Tests for contract expense assembly and validation.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::contracts::{
        ContractExpense, ContractExpenseRecord, ContractExpenseType, ContractMilestone,
        ContractMilestoneInput, ContractPayment, ContractPaymentInput, NewContractExpense,
    };

    fn ts() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn record(contract_total: Option<Decimal>) -> ContractExpenseRecord {
        ContractExpenseRecord {
            id: "ce-1".to_string(),
            budget_id: "budget-1".to_string(),
            expense_type: ContractExpenseType::RenovationCost,
            expense_name: "Main contractor".to_string(),
            expense_date: None,
            notes: None,
            vendor_name: "Acme Builders".to_string(),
            contract_total_amount: contract_total,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn milestone(seq: i32, percentage: Option<Decimal>, amount: Option<Decimal>) -> ContractMilestone {
        ContractMilestone {
            id: format!("m-{}", seq),
            contract_expense_id: "ce-1".to_string(),
            sequence_number: seq,
            percentage,
            amount,
            due_date: None,
            notes: None,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn payment(amount: Decimal) -> ContractPayment {
        ContractPayment {
            id: "p-1".to_string(),
            contract_expense_id: "ce-1".to_string(),
            amount,
            paid_at: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            notes: None,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[test]
    fn test_explicit_contract_total_wins() {
        let expense = ContractExpense::assemble(
            record(Some(dec!(1000))),
            vec![milestone(1, None, Some(dec!(700)))],
            vec![payment(dec!(400))],
        );

        assert_eq!(expense.total_contract_cost, dec!(1000));
        assert_eq!(expense.milestone_total_amount, dec!(700));
        assert_eq!(expense.paid_to_date, dec!(400));
        assert_eq!(expense.remaining_balance, dec!(600));
    }

    #[test]
    fn test_milestone_sum_fallback_without_explicit_total() {
        let expense = ContractExpense::assemble(
            record(None),
            vec![
                milestone(1, None, Some(dec!(300))),
                milestone(2, None, Some(dec!(200))),
            ],
            vec![payment(dec!(100))],
        );

        assert_eq!(expense.total_contract_cost, dec!(500));
        assert_eq!(expense.remaining_balance, dec!(400));
    }

    #[test]
    fn test_percentage_milestones_apply_to_explicit_total() {
        let expense = ContractExpense::assemble(
            record(Some(dec!(2000))),
            vec![
                milestone(1, Some(dec!(25)), None),
                milestone(2, Some(dec!(50)), None),
            ],
            vec![payment(dec!(0))],
        );

        assert_eq!(expense.milestone_total_amount, dec!(1500));
        // explicit total still wins as the cost
        assert_eq!(expense.total_contract_cost, dec!(2000));
    }

    #[test]
    fn test_percentage_milestone_without_total_counts_zero() {
        let expense = ContractExpense::assemble(
            record(None),
            vec![
                milestone(1, Some(dec!(50)), None),
                milestone(2, None, Some(dec!(250))),
            ],
            vec![payment(dec!(0))],
        );

        assert_eq!(expense.milestone_total_amount, dec!(250));
    }

    #[test]
    fn test_overpayment_leaves_negative_balance() {
        let expense = ContractExpense::assemble(
            record(Some(dec!(500))),
            vec![],
            vec![payment(dec!(650))],
        );

        assert_eq!(expense.remaining_balance, dec!(-150));
    }

    fn new_input() -> NewContractExpense {
        NewContractExpense {
            budget_id: "budget-1".to_string(),
            expense_type: ContractExpenseType::ExternalService,
            expense_name: " Plumbing ".to_string(),
            expense_date: None,
            notes: Some("  ".to_string()),
            vendor_name: " Pipes & Co ".to_string(),
            contract_total_amount: Some(dec!(800)),
            milestones: vec![
                ContractMilestoneInput {
                    sequence_number: 1,
                    percentage: None,
                    amount: Some(dec!(400)),
                    due_date: None,
                    notes: None,
                },
                // no percentage and no amount: dropped
                ContractMilestoneInput {
                    sequence_number: 2,
                    percentage: None,
                    amount: None,
                    due_date: None,
                    notes: None,
                },
                // non-positive sequence number: dropped
                ContractMilestoneInput {
                    sequence_number: 0,
                    percentage: Some(dec!(10)),
                    amount: None,
                    due_date: None,
                    notes: None,
                },
            ],
            payments: vec![
                ContractPaymentInput {
                    amount: dec!(400),
                    paid_at: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
                    notes: None,
                },
                ContractPaymentInput {
                    amount: dec!(-1),
                    paid_at: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
                    notes: None,
                },
            ],
        }
    }

    #[test]
    fn test_sanitize_trims_and_drops_unusable_children() {
        let mut input = new_input();
        input.sanitize().unwrap();

        assert_eq!(input.expense_name, "Plumbing");
        assert_eq!(input.vendor_name, "Pipes & Co");
        assert_eq!(input.notes, None);
        assert_eq!(input.milestones.len(), 1);
        assert_eq!(input.payments.len(), 1);
    }

    #[test]
    fn test_validate_requires_a_payment() {
        let mut input = new_input();
        input.payments.clear();
        input.sanitize().unwrap();
        assert!(input.validate().is_err());

        let mut valid = new_input();
        valid.sanitize().unwrap();
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_sanitize_rejects_blank_vendor() {
        let mut input = new_input();
        input.vendor_name = "   ".to_string();
        assert!(input.sanitize().is_err());
    }

    #[test]
    fn test_expense_type_round_trip() {
        for expense_type in [
            ContractExpenseType::RenovationCost,
            ContractExpenseType::VariationOrder,
            ContractExpenseType::ExternalService,
        ] {
            assert_eq!(
                ContractExpenseType::parse(expense_type.as_str()),
                Some(expense_type)
            );
        }
        assert_eq!(ContractExpenseType::parse("misc"), None);
    }
}
