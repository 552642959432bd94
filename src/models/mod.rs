//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contract;
mod employer;
mod entry;
mod payslip;
mod pension_scheme;
mod person;
mod worker;

pub use contract::Contract;
pub use employer::{Employer, EmployerProfile};
pub use entry::{DeductionEntry, IncomeEntry, total_deductions, total_income};
pub use payslip::{Payslip, PayslipTotals};
pub use pension_scheme::{
    CommissionMode, PUBLIC_SCHEME_CODE, PensionScheme, default_public_scheme_rate,
};
pub use person::{Address, DocumentType, IdentityDocument, Person};
pub use worker::{TerminationReason, Worker, WorkerStatus};
