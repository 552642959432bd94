//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.
//! Workers are addressed by their 0-based position among active workers,
//! in hiring order, the same selection the library's
//! [`Employer::active_worker`](crate::models::Employer::active_worker) uses.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::error::PayrollError;
use crate::models::{Payslip, WorkerStatus};

use super::request::{EntryRequest, HireRequest, TerminationRequest, WorkersQuery};
use super::response::{ApiError, ApiErrorResponse, EmployerResponse, WorkerSummary};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employer", get(employer_handler))
        .route("/workers", get(list_workers_handler).post(hire_handler))
        .route("/workers/active/:index/income", post(register_income_handler))
        .route(
            "/workers/active/:index/deductions",
            post(register_deduction_handler),
        )
        .route("/workers/active/:index/termination", post(terminate_handler))
        .route("/workers/active/:index/payslip", post(payslip_handler))
        .with_state(state)
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

/// Unwraps the `:index` path segment.
fn parse_index(index: Result<Path<usize>, PathRejection>) -> ApiResult<usize> {
    index.map(|Path(index)| index).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(error = %body_text, "Invalid worker index");
        ApiErrorResponse::bad_request(ApiError::new("VALIDATION_ERROR", body_text))
    })
}

/// Unwraps the query string.
fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query.map(|Query(query)| query).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(error = %body_text, "Invalid query string");
        ApiErrorResponse::bad_request(ApiError::new("VALIDATION_ERROR", body_text))
    })
}

/// Handler for `GET /employer`.
async fn employer_handler(State(state): State<AppState>) -> Json<EmployerResponse> {
    Json(state.with_employer(|employer| EmployerResponse::from(&*employer)))
}

/// Handler for `GET /workers`.
///
/// Lists workers with the requested status (active by default) in hiring order.
async fn list_workers_handler(
    State(state): State<AppState>,
    query: Result<Query<WorkersQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<WorkerSummary>>> {
    let status = parse_query(query)?.status.unwrap_or(WorkerStatus::Active);
    let workers: Vec<WorkerSummary> = state.with_employer(|employer| {
        employer
            .workers_by_status(status)
            .map(WorkerSummary::from)
            .collect()
    });
    Ok(Json(workers))
}

/// Handler for `POST /workers`.
async fn hire_handler(
    State(state): State<AppState>,
    payload: Result<Json<HireRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<WorkerSummary>)> {
    let request = parse_body(payload)?;
    let worker = request.into_worker(state.config()).map_err(|err| {
        warn!(error = %err, "Hire request rejected");
        ApiErrorResponse::from(err)
    })?;

    let summary = state.with_employer(|employer| {
        let position = employer.hire(worker);
        WorkerSummary::from(&employer.workers()[position])
    });
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Handler for `POST /workers/active/:index/income`.
async fn register_income_handler(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> ApiResult<Json<WorkerSummary>> {
    let index = parse_index(index)?;
    let entry = parse_body(payload)?;
    let summary = state.with_employer(|employer| {
        let worker = employer.active_worker_mut(index)?;
        worker.register_income(entry.label, entry.amount)?;
        Ok::<_, PayrollError>(WorkerSummary::from(&*worker))
    })?;
    Ok(Json(summary))
}

/// Handler for `POST /workers/active/:index/deductions`.
async fn register_deduction_handler(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
    payload: Result<Json<EntryRequest>, JsonRejection>,
) -> ApiResult<Json<WorkerSummary>> {
    let index = parse_index(index)?;
    let entry = parse_body(payload)?;
    let summary = state.with_employer(|employer| {
        let worker = employer.active_worker_mut(index)?;
        worker.register_deduction(entry.label, entry.amount)?;
        Ok::<_, PayrollError>(WorkerSummary::from(&*worker))
    })?;
    Ok(Json(summary))
}

/// Handler for `POST /workers/active/:index/termination`.
async fn terminate_handler(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
    payload: Result<Json<TerminationRequest>, JsonRejection>,
) -> ApiResult<Json<WorkerSummary>> {
    let index = parse_index(index)?;
    let request = parse_body(payload)?;
    let summary = state.with_employer(|employer| {
        employer
            .terminate_worker(index, request.reason)
            .map(WorkerSummary::from)
    })?;
    Ok(Json(summary))
}

/// Handler for `POST /workers/active/:index/payslip`.
///
/// Returns the computed payslip; the worker's pending entries are consumed.
async fn payslip_handler(
    State(state): State<AppState>,
    index: Result<Path<usize>, PathRejection>,
) -> ApiResult<Json<Payslip>> {
    let index = parse_index(index)?;
    let engine = state.engine();
    let result = state.with_employer(|employer| engine.generate_for_active(employer, index));

    match result {
        Ok(payslip) => {
            info!(
                payslip_id = %payslip.payslip_id,
                index,
                net_pay = %payslip.totals.net_pay,
                "Payslip served"
            );
            Ok(Json(payslip))
        }
        Err(err) => {
            warn!(index, error = %err, "Payslip generation failed");
            Err(err.into())
        }
    }
}
