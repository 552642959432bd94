//! Response types for the payroll API.
//!
//! This module defines the worker and employer views returned by the API,
//! the error response structures, and the mapping from [`PayrollError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::{
    CommissionMode, DocumentType, Employer, EmployerProfile, TerminationReason, Worker,
    WorkerStatus,
};

/// A worker as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSummary {
    /// Identity document type.
    pub document_type: DocumentType,
    /// Identity document number.
    pub document_number: String,
    /// Given name followed by both surnames.
    pub full_name: String,
    /// Lifecycle status.
    pub status: WorkerStatus,
    /// Display name of the pension scheme.
    pub pension_scheme: String,
    /// Commission mode, present for private funds only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub commission_mode: Option<CommissionMode>,
    /// Whether the worker receives the family allowance.
    pub family_allowance: bool,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Reason recorded at termination.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub termination_reason: Option<TerminationReason>,
    /// Number of additional income entries waiting for the next payslip.
    pub pending_income: usize,
    /// Number of additional deduction entries waiting for the next payslip.
    pub pending_deductions: usize,
}

impl From<&Worker> for WorkerSummary {
    fn from(worker: &Worker) -> Self {
        let scheme = worker.pension_scheme();
        WorkerSummary {
            document_type: worker.person().document.document_type,
            document_number: worker.document_number().to_string(),
            full_name: worker.full_name(),
            status: worker.status(),
            pension_scheme: scheme.to_string(),
            commission_mode: scheme
                .is_private_fund()
                .then(|| worker.commission_mode()),
            family_allowance: worker.has_family_allowance(),
            base_salary: worker.contract().base_salary(),
            termination_reason: worker.termination_reason(),
            pending_income: worker.additional_income().len(),
            pending_deductions: worker.additional_deductions().len(),
        }
    }
}

/// The employer as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerResponse {
    /// Identification data.
    #[serde(flatten)]
    pub profile: EmployerProfile,
    /// Number of active workers.
    pub active_workers: usize,
    /// Number of terminated workers.
    pub terminated_workers: usize,
}

impl From<&Employer> for EmployerResponse {
    fn from(employer: &Employer) -> Self {
        EmployerResponse {
            profile: employer.profile(),
            active_workers: employer.count_by_status(WorkerStatus::Active),
            terminated_workers: employer.count_by_status(WorkerStatus::Terminated),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            PayrollError::PensionSchemeNotFound { code } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "PENSION_SCHEME_NOT_FOUND",
                    message,
                    format!("The pension scheme code '{}' is not in the catalog", code),
                ),
            ),
            PayrollError::InvalidAmount { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_AMOUNT", message),
            ),
            PayrollError::AmountOverflow { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("AMOUNT_OVERFLOW", message),
            ),
            PayrollError::WorkerNotActive { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("WORKER_NOT_ACTIVE", message),
            ),
            PayrollError::NoEligibleWorker => (
                StatusCode::NOT_FOUND,
                ApiError::new("NO_ELIGIBLE_WORKER", message),
            ),
            PayrollError::WorkerNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "WORKER_NOT_FOUND",
                    message,
                    "Indexes are 0-based over active workers, in hiring order",
                ),
            ),
        };
        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_pension_scheme_not_found_maps_to_bad_request() {
        let response: ApiErrorResponse = PayrollError::PensionSchemeNotFound {
            code: "spp".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "PENSION_SCHEME_NOT_FOUND");
        assert!(response.error.message.contains("spp"));
    }

    #[test]
    fn test_selection_errors_map_to_not_found() {
        let response: ApiErrorResponse = PayrollError::NoEligibleWorker.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "NO_ELIGIBLE_WORKER");

        let response: ApiErrorResponse = PayrollError::WorkerNotFound {
            index: 3,
            available: 1,
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "WORKER_NOT_FOUND");
    }

    #[test]
    fn test_amount_overflow_maps_to_unprocessable_entity() {
        let response: ApiErrorResponse = PayrollError::AmountOverflow {
            field: "gross_pay".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "AMOUNT_OVERFLOW");
        assert!(response.error.message.contains("gross_pay"));
    }

    #[test]
    fn test_worker_not_active_maps_to_conflict() {
        let response: ApiErrorResponse = PayrollError::WorkerNotActive {
            document_number: "111".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let response: ApiErrorResponse = PayrollError::ConfigNotFound {
            path: "/etc/payroll/policy.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
        assert!(response.error.details.unwrap().contains("policy.yaml"));
    }
}
