//! Payslip generation.
//!
//! The [`PayslipEngine`] assembles a worker's income and deduction lines for
//! the current period, derives the totals, and consumes the worker's
//! pending period entries.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{PayrollConfig, PayrollPolicy};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    Employer, IncomeEntry, Payslip, PayslipTotals, Worker, total_deductions, total_income,
};

use super::{calculate_family_allowance, calculate_income_tax, calculate_pension_deduction};

/// Label of the base salary income line.
pub const BASE_SALARY_LABEL: &str = "Basic Salary";

/// Computes payslips under a fixed payroll policy.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayslipEngine;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{
///     Address, CommissionMode, Contract, DocumentType, IdentityDocument, PensionScheme, Person, Worker,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use std::sync::Arc;
///
/// let person = Person {
///     document: IdentityDocument { document_type: DocumentType::Dni, number: "70112233".to_string() },
///     given_name: "Luis".to_string(),
///     paternal_surname: "Torres".to_string(),
///     maternal_surname: "Vega".to_string(),
///     address: Address {
///         street: "Calle Las Flores 120".to_string(),
///         reference: "N/A".to_string(),
///         district: "Surco".to_string(),
///         province: "Lima".to_string(),
///         department: "Lima".to_string(),
///     },
/// };
/// let contract = Contract::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), Decimal::from(1000)).unwrap();
/// let onp = Arc::new(PensionScheme::public_scheme(Decimal::from_str("0.13").unwrap()));
/// let mut worker = Worker::new(person, contract, onp, false, CommissionMode::Flow);
/// worker.register_income("Bonus", Decimal::from(200)).unwrap();
/// worker.register_deduction("Advance", Decimal::from(100)).unwrap();
///
/// let engine = PayslipEngine::new(PayrollPolicy::default());
/// let payslip = engine.generate_payslip(&mut worker).unwrap();
///
/// assert_eq!(payslip.totals.gross_pay, Decimal::from(1200));
/// assert_eq!(payslip.totals.net_pay, Decimal::from(944));
/// assert!(worker.additional_income().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayslipEngine {
    policy: PayrollPolicy,
}

impl PayslipEngine {
    /// Creates an engine that applies `policy`.
    pub fn new(policy: PayrollPolicy) -> Self {
        Self { policy }
    }

    /// Creates an engine from a loaded configuration.
    pub fn from_config(config: &PayrollConfig) -> Self {
        Self::new(config.policy().clone())
    }

    /// The policy this engine applies.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Generates the payslip for the current period and clears the worker's
    /// period entries.
    ///
    /// Income lines: base salary, family allowance (if entitled), then the
    /// additional income entries. Deduction lines: pension contribution on
    /// gross pay, income tax (if gross pay exceeds the threshold), then the
    /// additional deduction entries.
    ///
    /// A terminated worker yields
    /// [`PayrollError::WorkerNotActive`](crate::error::PayrollError::WorkerNotActive);
    /// nothing is computed and the worker is left untouched. A line or total
    /// outside the decimal range yields
    /// [`PayrollError::AmountOverflow`](crate::error::PayrollError::AmountOverflow)
    /// and the period entries stay pending.
    pub fn generate_payslip(&self, worker: &mut Worker) -> PayrollResult<Payslip> {
        if let Err(err) = worker.ensure_active() {
            warn!(
                document_number = %worker.document_number(),
                "Payslip requested for inactive worker"
            );
            return Err(err);
        }

        let payslip = match self.compute(worker) {
            Ok(payslip) => payslip,
            Err(err) => {
                warn!(
                    document_number = %worker.document_number(),
                    error = %err,
                    "Payslip computation failed"
                );
                return Err(err);
            }
        };
        worker.clear_period_entries();

        info!(
            payslip_id = %payslip.payslip_id,
            document_number = %payslip.document_number,
            gross_pay = %payslip.totals.gross_pay,
            total_deductions = %payslip.totals.total_deductions,
            net_pay = %payslip.totals.net_pay,
            "Payslip generated"
        );
        Ok(payslip)
    }

    /// Selects the active worker at `index` on the employer's roster and
    /// generates its payslip.
    pub fn generate_for_active(
        &self,
        employer: &mut Employer,
        index: usize,
    ) -> PayrollResult<Payslip> {
        let worker = employer.active_worker_mut(index)?;
        self.generate_payslip(worker)
    }

    fn compute(&self, worker: &Worker) -> PayrollResult<Payslip> {
        let mut income = vec![IncomeEntry::new(
            BASE_SALARY_LABEL,
            worker.contract().base_salary(),
        )];
        income.extend(calculate_family_allowance(worker, &self.policy)?);
        income.extend_from_slice(worker.additional_income());
        let gross_pay = total_income(&income)?;

        let mut deductions = vec![calculate_pension_deduction(worker, gross_pay)?];
        deductions.extend(calculate_income_tax(gross_pay, &self.policy.income_tax)?);
        deductions.extend_from_slice(worker.additional_deductions());
        let total_deductions = total_deductions(&deductions)?;
        let net_pay = gross_pay
            .checked_sub(total_deductions)
            .ok_or_else(|| PayrollError::AmountOverflow {
                field: "net_pay".to_string(),
            })?;

        let scheme = worker.pension_scheme();
        let commission_mode = scheme
            .is_private_fund()
            .then(|| worker.commission_mode());

        Ok(Payslip {
            payslip_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            document_number: worker.document_number().to_string(),
            worker_name: worker.full_name(),
            pension_scheme: scheme.to_string(),
            income,
            deductions,
            totals: PayslipTotals {
                gross_pay,
                total_deductions,
                net_pay,
            },
            commission_mode,
        })
    }
}
