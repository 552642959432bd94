//! HTTP API module for the payroll engine.
//!
//! This module exposes the library operations (hiring, period entries,
//! termination, payslip generation) as JSON endpoints over one shared
//! employer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ContractRequest, EntryRequest, HireRequest, TerminationRequest, WorkersQuery};
pub use response::{ApiError, ApiErrorResponse, EmployerResponse, WorkerSummary};
pub use state::AppState;
