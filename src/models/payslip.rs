//! Payslip models.
//!
//! This module contains the [`Payslip`] type produced by the payslip engine
//! and its [`PayslipTotals`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CommissionMode, DeductionEntry, IncomeEntry};

/// Aggregated totals of a payslip.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayslipTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = PayslipTotals {
///     gross_pay: Decimal::from_str("1613").unwrap(),
///     total_deductions: Decimal::from_str("209.69").unwrap(),
///     net_pay: Decimal::from_str("1403.31").unwrap(),
/// };
/// assert_eq!(totals.gross_pay - totals.total_deductions, totals.net_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipTotals {
    /// Sum of all income lines.
    pub gross_pay: Decimal,
    /// Sum of all deduction lines.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
}

/// A computed payslip for one worker and one period.
///
/// Payslips are not stored anywhere; the caller renders or forwards them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this payslip.
    pub payslip_id: Uuid,
    /// When the payslip was generated.
    pub generated_at: DateTime<Utc>,
    /// The worker's identity document number.
    pub document_number: String,
    /// The worker's full name.
    pub worker_name: String,
    /// Display name of the worker's pension scheme.
    pub pension_scheme: String,
    /// Income lines in order: base salary, family allowance, additional income.
    pub income: Vec<IncomeEntry>,
    /// Deduction lines in order: pension, income tax, additional deductions.
    pub deductions: Vec<DeductionEntry>,
    /// Aggregated totals.
    pub totals: PayslipTotals,
    /// Commission mode used for a private fund; `None` for the public scheme.
    /// Informational only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub commission_mode: Option<CommissionMode>,
}

impl Payslip {
    /// Returns the income line with the given label, if present.
    pub fn income_line(&self, label: &str) -> Option<&IncomeEntry> {
        self.income.iter().find(|e| e.label == label)
    }

    /// Returns the deduction line with the given label, if present.
    pub fn deduction_line(&self, label: &str) -> Option<&DeductionEntry> {
        self.deductions.iter().find(|e| e.label == label)
    }
}
