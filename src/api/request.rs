//! Request types for the payroll API.
//!
//! Request bodies carry already-typed values; amounts are decimals and
//! enums are snake_case strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::models::{
    CommissionMode, Contract, Person, TerminationReason, Worker, WorkerStatus,
};

/// Request body for `POST /workers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireRequest {
    /// Personal data of the new worker.
    pub person: Person,
    /// Contract terms.
    pub contract: ContractRequest,
    /// Catalog code of the pension scheme (e.g. "integra", "onp").
    pub pension_scheme: String,
    /// Whether the worker is entitled to the family allowance.
    #[serde(default)]
    pub family_allowance: bool,
    /// Commission mode for private funds. Ignored for the public scheme.
    #[serde(default = "default_commission_mode")]
    pub commission_mode: CommissionMode,
}

fn default_commission_mode() -> CommissionMode {
    CommissionMode::Flow
}

/// Contract terms in a hire request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRequest {
    /// The date the contract starts.
    pub start_date: NaiveDate,
    /// Monthly base salary.
    pub base_salary: Decimal,
}

impl HireRequest {
    /// Builds the worker, resolving the pension scheme against the catalog.
    pub fn into_worker(self, config: &PayrollConfig) -> PayrollResult<Worker> {
        let pension_scheme = config.pension_scheme(&self.pension_scheme)?;
        let contract = Contract::new(self.contract.start_date, self.contract.base_salary)?;

        Ok(Worker::new(
            self.person,
            contract,
            pension_scheme,
            self.family_allowance,
            self.commission_mode,
        ))
    }
}

/// Request body for registering an additional income or deduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// What the entry is for.
    pub label: String,
    /// The amount; must not be negative.
    pub amount: Decimal,
}

/// Request body for `POST /workers/active/:index/termination`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationRequest {
    /// Why the employment ends.
    pub reason: TerminationReason,
}

/// Query string for `GET /workers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkersQuery {
    /// Status filter; defaults to active workers.
    #[serde(default)]
    pub status: Option<WorkerStatus>,
}
