//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, PoisonError};

use crate::calculation::PayslipEngine;
use crate::config::PayrollConfig;
use crate::models::Employer;

/// Shared application state.
///
/// The employer sits behind a single mutex. Every handler performs its
/// whole operation under one lock, so roster appends and the period entries
/// of a worker are never mutated by two requests at once.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PayrollConfig>,
    engine: PayslipEngine,
    employer: Arc<Mutex<Employer>>,
}

impl AppState {
    /// Creates the application state for `employer` under `config`.
    pub fn new(config: PayrollConfig, employer: Employer) -> Self {
        let engine = PayslipEngine::from_config(&config);
        Self {
            config: Arc::new(config),
            engine,
            employer: Arc::new(Mutex::new(employer)),
        }
    }

    /// Returns the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payslip engine.
    pub fn engine(&self) -> &PayslipEngine {
        &self.engine
    }

    /// Runs `f` with exclusive access to the employer.
    ///
    /// A poisoned lock is recovered.
    pub fn with_employer<T>(&self, f: impl FnOnce(&mut Employer) -> T) -> T {
        let mut employer = self
            .employer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut employer)
    }
}
