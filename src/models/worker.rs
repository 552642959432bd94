//! Worker model and lifecycle.
//!
//! A [`Worker`] embeds the personal data of a [`Person`] together with the
//! employment attributes the payslip engine needs. Workers start
//! [`WorkerStatus::Active`] and may be terminated exactly once.

use std::fmt;
use std::iter;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};

use super::entry::checked_sum;
use super::{CommissionMode, Contract, DeductionEntry, IncomeEntry, PensionScheme, Person};

/// Lifecycle status of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    /// Currently employed.
    Active,
    /// No longer employed. Terminal.
    Terminated,
}

/// Why a worker's employment ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The worker resigned.
    VoluntaryResignation,
    /// The employer dismissed the worker.
    Dismissal,
    /// The contract reached its end date.
    ContractEnd,
}

impl TerminationReason {
    /// All reasons, in menu order.
    pub const ALL: [TerminationReason; 3] = [
        TerminationReason::VoluntaryResignation,
        TerminationReason::Dismissal,
        TerminationReason::ContractEnd,
    ];

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            TerminationReason::VoluntaryResignation => "Voluntary Resignation",
            TerminationReason::Dismissal => "Dismissal",
            TerminationReason::ContractEnd => "End of Contract",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// An employee on the employer's roster.
///
/// The pension scheme is shared with every other worker affiliated to the
/// same fund and never changes after hiring. Additional income and
/// deduction entries accumulate until the next payslip consumes them.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{
///     Address, CommissionMode, Contract, DocumentType, IdentityDocument, PensionScheme, Person,
///     Worker, WorkerStatus,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let person = Person {
///     document: IdentityDocument { document_type: DocumentType::Dni, number: "45678912".to_string() },
///     given_name: "Rosa".to_string(),
///     paternal_surname: "Quispe".to_string(),
///     maternal_surname: "Mamani".to_string(),
///     address: Address {
///         street: "Jr. Puno 455".to_string(),
///         reference: "N/A".to_string(),
///         district: "Cercado".to_string(),
///         province: "Lima".to_string(),
///         department: "Lima".to_string(),
///     },
/// };
/// let contract = Contract::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Decimal::from(1500)).unwrap();
///
/// let mut worker = Worker::new(person, contract, Arc::new(PensionScheme::integra()), true, CommissionMode::Flow);
/// assert_eq!(worker.status(), WorkerStatus::Active);
///
/// worker.register_income("Bonus", Decimal::from(200)).unwrap();
/// assert_eq!(worker.additional_income().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Worker {
    person: Person,
    contract: Contract,
    pension_scheme: Arc<PensionScheme>,
    family_allowance: bool,
    commission_mode: CommissionMode,
    status: WorkerStatus,
    termination_reason: Option<TerminationReason>,
    additional_income: Vec<IncomeEntry>,
    additional_deductions: Vec<DeductionEntry>,
}

impl Worker {
    /// Creates an active worker with no pending period entries.
    pub fn new(
        person: Person,
        contract: Contract,
        pension_scheme: Arc<PensionScheme>,
        family_allowance: bool,
        commission_mode: CommissionMode,
    ) -> Self {
        Self {
            person,
            contract,
            pension_scheme,
            family_allowance,
            commission_mode,
            status: WorkerStatus::Active,
            termination_reason: None,
            additional_income: Vec::new(),
            additional_deductions: Vec::new(),
        }
    }

    /// Personal data.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Identity document number.
    pub fn document_number(&self) -> &str {
        self.person.document_number()
    }

    /// Given name followed by both surnames.
    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    /// Employment contract.
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// The pension scheme the worker is affiliated to.
    pub fn pension_scheme(&self) -> &Arc<PensionScheme> {
        &self.pension_scheme
    }

    /// Whether the worker receives the family allowance.
    pub fn has_family_allowance(&self) -> bool {
        self.family_allowance
    }

    /// The commission mode chosen for a private fund.
    pub fn commission_mode(&self) -> CommissionMode {
        self.commission_mode
    }

    /// Returns true when the private-fund commission is flow based.
    pub fn uses_flow_commission(&self) -> bool {
        self.commission_mode.is_flow()
    }

    /// Current lifecycle status.
    pub fn status(&self) -> WorkerStatus {
        self.status
    }

    /// Returns true while the worker is active.
    pub fn is_active(&self) -> bool {
        self.status == WorkerStatus::Active
    }

    /// The reason recorded at termination, if any.
    pub fn termination_reason(&self) -> Option<TerminationReason> {
        self.termination_reason
    }

    /// Income entries pending for the current period, in registration order.
    pub fn additional_income(&self) -> &[IncomeEntry] {
        &self.additional_income
    }

    /// Deduction entries pending for the current period, in registration order.
    pub fn additional_deductions(&self) -> &[DeductionEntry] {
        &self.additional_deductions
    }

    /// Registers an additional income (bonus, mobility, ...) for the current period.
    ///
    /// Fails with [`PayrollError::WorkerNotActive`] for a terminated worker and
    /// with [`PayrollError::InvalidAmount`] for a negative amount, or one that
    /// would take base salary plus pending income past the decimal range.
    pub fn register_income(&mut self, label: impl Into<String>, amount: Decimal) -> PayrollResult<()> {
        let label = label.into();
        self.ensure_active()?;
        ensure_non_negative(&label, amount)?;
        let pending = self.additional_income.iter().map(|e| e.amount);
        ensure_period_total_fits(
            &label,
            iter::once(self.contract.base_salary())
                .chain(pending)
                .chain(iter::once(amount)),
        )?;

        debug!(
            document_number = %self.document_number(),
            label = %label,
            amount = %amount,
            "Registered additional income"
        );
        self.additional_income.push(IncomeEntry::new(label, amount));
        Ok(())
    }

    /// Registers an additional deduction (advance, loan, ...) for the current period.
    ///
    /// Fails with [`PayrollError::WorkerNotActive`] for a terminated worker and
    /// with [`PayrollError::InvalidAmount`] for a negative amount, or one that
    /// would take pending deductions past the decimal range.
    pub fn register_deduction(
        &mut self,
        label: impl Into<String>,
        amount: Decimal,
    ) -> PayrollResult<()> {
        let label = label.into();
        self.ensure_active()?;
        ensure_non_negative(&label, amount)?;
        let pending = self.additional_deductions.iter().map(|e| e.amount);
        ensure_period_total_fits(&label, pending.chain(iter::once(amount)))?;

        debug!(
            document_number = %self.document_number(),
            label = %label,
            amount = %amount,
            "Registered additional deduction"
        );
        self.additional_deductions
            .push(DeductionEntry::new(label, amount));
        Ok(())
    }

    /// Terminates the worker's employment.
    ///
    /// The transition is one-way. Terminating an already terminated worker
    /// returns [`PayrollError::WorkerNotActive`] and keeps the first reason.
    pub fn terminate(&mut self, reason: TerminationReason) -> PayrollResult<()> {
        self.ensure_active()?;

        self.status = WorkerStatus::Terminated;
        self.termination_reason = Some(reason);
        info!(
            document_number = %self.document_number(),
            reason = %reason,
            "Worker terminated"
        );
        Ok(())
    }

    /// Returns an error unless the worker is active.
    pub fn ensure_active(&self) -> PayrollResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(PayrollError::WorkerNotActive {
                document_number: self.document_number().to_string(),
            })
        }
    }

    /// Empties both period entry lists. Only the payslip engine calls this.
    pub(crate) fn clear_period_entries(&mut self) {
        self.additional_income.clear();
        self.additional_deductions.clear();
    }
}

fn ensure_period_total_fits(
    label: &str,
    amounts: impl Iterator<Item = Decimal>,
) -> PayrollResult<()> {
    checked_sum(amounts, label)
        .map(|_| ())
        .map_err(|_| PayrollError::InvalidAmount {
            field: label.to_string(),
            message: "period total would exceed the representable range".to_string(),
        })
}

fn ensure_non_negative(label: &str, amount: Decimal) -> PayrollResult<()> {
    if amount < Decimal::ZERO {
        return Err(PayrollError::InvalidAmount {
            field: label.to_string(),
            message: format!("must not be negative, got {}", amount),
        });
    }
    Ok(())
}
