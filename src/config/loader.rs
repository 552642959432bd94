//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollConfig, PayrollPolicy, PensionFundsConfig};

/// Loads payroll configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml         # Minimum living wage, family allowance, income tax
/// └── pension_funds.yaml  # Private funds and the public scheme
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let scheme = loader.config().pension_scheme("prima")?;
/// println!("Loaded {}", scheme);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing, is not valid YAML, or holds a
    /// negative rate, a negative amount, or a duplicated scheme code.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PayrollPolicy>(&policy_path)?;
        Self::validate_policy(&policy, &policy_path)?;

        let funds_path = path.join("pension_funds.yaml");
        let funds = Self::load_yaml::<PensionFundsConfig>(&funds_path)?;
        Self::validate_funds(&funds, &funds_path)?;

        let config = PayrollConfig::new(policy, funds.into_schemes());
        info!(
            path = %path.display(),
            pension_schemes = config.pension_schemes().len(),
            minimum_living_wage = %config.policy().minimum_living_wage,
            "Payroll configuration loaded"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_policy(policy: &PayrollPolicy, path: &Path) -> PayrollResult<()> {
        let values = [
            ("minimum_living_wage", policy.minimum_living_wage),
            ("family_allowance_rate", policy.family_allowance_rate),
            ("income_tax.threshold", policy.income_tax.threshold),
            ("income_tax.rate", policy.income_tax.rate),
        ];
        for (field, value) in values {
            Self::ensure_non_negative(field, value, path)?;
        }
        Ok(())
    }

    fn validate_funds(funds: &PensionFundsConfig, path: &Path) -> PayrollResult<()> {
        let mut codes = HashSet::new();

        for fund in &funds.private_funds {
            Self::ensure_non_negative(&fund.code, fund.obligatory_rate, path)?;
            Self::ensure_non_negative(&fund.code, fund.premium_rate, path)?;
            Self::ensure_non_negative(&fund.code, fund.flow_commission_rate, path)?;
            Self::ensure_unique(&mut codes, &fund.code, path)?;
        }

        Self::ensure_non_negative(&funds.public_scheme.code, funds.public_scheme.rate, path)?;
        Self::ensure_unique(&mut codes, &funds.public_scheme.code, path)
    }

    fn ensure_non_negative(field: &str, value: Decimal, path: &Path) -> PayrollResult<()> {
        if value < Decimal::ZERO {
            return Err(PayrollError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("'{}' must not be negative, got {}", field, value),
            });
        }
        Ok(())
    }

    fn ensure_unique(codes: &mut HashSet<String>, code: &str, path: &Path) -> PayrollResult<()> {
        if !codes.insert(code.to_lowercase()) {
            return Err(PayrollError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("duplicate pension scheme code '{}'", code),
            });
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
