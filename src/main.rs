//! Entry point for the payroll engine server.
//!
//! Environment:
//! - `PAYROLL_CONFIG_DIR`: configuration directory (default `./config/default`)
//! - `PAYROLL_BIND_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `PAYROLL_EMPLOYER_TAX_ID`, `PAYROLL_EMPLOYER_NAME`, `PAYROLL_EMPLOYER_ADDRESS`:
//!   the company whose payroll is run
//! - `RUST_LOG`: log filter (default `payroll_engine=info`)

use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::Employer;

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payroll_engine=info")),
        )
        .init();

    let config_dir = env_or("PAYROLL_CONFIG_DIR", "./config/default");
    let config = match ConfigLoader::load(&config_dir) {
        Ok(loader) => loader.into_config(),
        Err(err) => {
            error!(error = %err, "Failed to load payroll configuration");
            return ExitCode::FAILURE;
        }
    };

    let employer = Employer::new(
        env_or("PAYROLL_EMPLOYER_TAX_ID", "00000000000"),
        env_or("PAYROLL_EMPLOYER_NAME", "Unnamed Employer"),
        env_or("PAYROLL_EMPLOYER_ADDRESS", ""),
    );
    info!(
        tax_id = %employer.tax_id(),
        legal_name = %employer.legal_name(),
        "Employer registered"
    );

    let app = create_router(AppState::new(config, employer));

    let addr = env_or("PAYROLL_BIND_ADDR", "127.0.0.1:3000");
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Payroll API listening on http://{}", addr);
    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
