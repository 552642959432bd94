//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine reports to its caller. None of them are
//! fatal: selection and precondition failures leave all state untouched.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::PensionSchemeNotFound {
///     code: "unknown".to_string(),
/// };
/// assert_eq!(error.to_string(), "Pension scheme not found: unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No pension scheme with the given catalog code exists.
    #[error("Pension scheme not found: {code}")]
    PensionSchemeNotFound {
        /// The catalog code that was requested.
        code: String,
    },

    /// A monetary amount was outside its allowed range.
    #[error("Invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// The field or entry label the amount belongs to.
        field: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// A monetary computation left the representable decimal range.
    #[error("Amount overflow while computing '{field}'")]
    AmountOverflow {
        /// The line or total being computed.
        field: String,
    },

    /// The operation requires an active worker.
    #[error("Worker '{document_number}' is not active")]
    WorkerNotActive {
        /// Identity document number of the worker.
        document_number: String,
    },

    /// There are no active workers to select from.
    #[error("No eligible worker: there are no active workers")]
    NoEligibleWorker,

    /// The selection index is outside the active roster.
    #[error("Worker not found at index {index} ({available} active workers)")]
    WorkerNotFound {
        /// The requested 0-based index.
        index: usize,
        /// How many active workers were available.
        available: usize,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_amount_displays_field_and_message() {
        let error = PayrollError::InvalidAmount {
            field: "Bonus".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount for 'Bonus': must not be negative"
        );
    }

    #[test]
    fn test_amount_overflow_displays_field() {
        let error = PayrollError::AmountOverflow {
            field: "gross_pay".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Amount overflow while computing 'gross_pay'"
        );
    }

    #[test]
    fn test_worker_not_active_displays_document() {
        let error = PayrollError::WorkerNotActive {
            document_number: "45678912".to_string(),
        };
        assert_eq!(error.to_string(), "Worker '45678912' is not active");
    }

    #[test]
    fn test_worker_not_found_displays_index_and_available() {
        let error = PayrollError::WorkerNotFound {
            index: 4,
            available: 2,
        };
        assert_eq!(
            error.to_string(),
            "Worker not found at index 4 (2 active workers)"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_eligible_worker() -> PayrollResult<()> {
            Err(PayrollError::NoEligibleWorker)
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_no_eligible_worker()?;
            Ok(())
        }

        assert_eq!(propagates_error(), Err(PayrollError::NoEligibleWorker));
    }
}
