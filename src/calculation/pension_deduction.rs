//! Pension deduction line.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{DeductionEntry, Worker};

/// Calculates the pension contribution line for a worker.
///
/// The amount comes from the worker's scheme via
/// [`PensionScheme::compute_deduction`](crate::models::PensionScheme::compute_deduction),
/// using the worker's commission mode. The line is labelled
/// `"Contribution <scheme>"`, e.g. `"Contribution AFP Integra"`.
pub fn calculate_pension_deduction(
    worker: &Worker,
    gross_pay: Decimal,
) -> PayrollResult<DeductionEntry> {
    let scheme = worker.pension_scheme();
    let amount = scheme.compute_deduction(gross_pay, worker.uses_flow_commission())?;
    Ok(DeductionEntry::new(format!("Contribution {}", scheme), amount))
}
