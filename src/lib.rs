//! Payroll engine for a single company.
//!
//! This crate registers workers and their pension scheme affiliation,
//! records per-period income and deduction entries, computes payslips
//! (gross pay, pension contribution, income tax withholding, net pay) and
//! manages the worker lifecycle. The [`api`] module serves the same
//! operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
