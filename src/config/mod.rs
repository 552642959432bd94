//! Configuration loading and management for the payroll engine.
//!
//! This module loads payroll policy (minimum living wage, family allowance,
//! income tax) and the pension scheme catalog from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Minimum living wage: {}", config.policy().minimum_living_wage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    IncomeTaxPolicy, PayrollConfig, PayrollPolicy, PensionFundConfig, PensionFundsConfig,
    PublicSchemeConfig,
};
