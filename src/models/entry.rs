//! Income and deduction line items.
//!
//! The same two types serve both as ad-hoc period entries registered on a
//! [`Worker`](super::Worker) and as the lines of a generated
//! [`Payslip`](super::Payslip).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// An income line (salary, allowance, bonus, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// What the income is for.
    pub label: String,
    /// The amount, never negative.
    pub amount: Decimal,
}

impl IncomeEntry {
    /// Creates an income entry.
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// A deduction line (pension, tax, advance, loan, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionEntry {
    /// What the deduction is for.
    pub label: String,
    /// The amount, never negative.
    pub amount: Decimal,
}

impl DeductionEntry {
    /// Creates a deduction entry.
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Sums the amounts of income entries.
///
/// Fails with [`PayrollError::AmountOverflow`] when the sum leaves the
/// decimal range.
pub fn total_income(entries: &[IncomeEntry]) -> PayrollResult<Decimal> {
    checked_sum(entries.iter().map(|e| e.amount), "gross_pay")
}

/// Sums the amounts of deduction entries.
///
/// Fails with [`PayrollError::AmountOverflow`] when the sum leaves the
/// decimal range.
pub fn total_deductions(entries: &[DeductionEntry]) -> PayrollResult<Decimal> {
    checked_sum(entries.iter().map(|e| e.amount), "total_deductions")
}

pub(crate) fn checked_sum(
    mut amounts: impl Iterator<Item = Decimal>,
    field: &str,
) -> PayrollResult<Decimal> {
    amounts.try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount)
            .ok_or_else(|| PayrollError::AmountOverflow {
                field: field.to_string(),
            })
    })
}
