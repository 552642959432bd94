//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML configuration files, and [`PayrollConfig`], the assembled
//! configuration handed to the payslip engine and the pension catalog.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PUBLIC_SCHEME_CODE, PensionScheme, default_public_scheme_rate};

/// Fifth-category income tax withholding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxPolicy {
    /// Gross pay above which tax is withheld.
    pub threshold: Decimal,
    /// Rate applied to the gross pay exceeding the threshold.
    pub rate: Decimal,
}

/// Statutory values used by the payslip engine.
///
/// Loaded from `policy.yaml`. The [`Default`] implementation carries the
/// statutory values: minimum living wage 1130.00, family allowance 10% of
/// it, and 8% withholding above 2400.00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// The statutory minimum living wage.
    pub minimum_living_wage: Decimal,
    /// Share of the minimum living wage paid as family allowance.
    pub family_allowance_rate: Decimal,
    /// Income tax withholding parameters.
    pub income_tax: IncomeTaxPolicy,
}

impl PayrollPolicy {
    /// The family allowance amount: `family_allowance_rate * minimum_living_wage`.
    pub fn family_allowance_amount(&self) -> PayrollResult<Decimal> {
        self.minimum_living_wage
            .checked_mul(self.family_allowance_rate)
            .ok_or_else(|| PayrollError::AmountOverflow {
                field: "family_allowance".to_string(),
            })
    }
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            minimum_living_wage: Decimal::new(113000, 2),
            family_allowance_rate: Decimal::new(10, 2),
            income_tax: IncomeTaxPolicy {
                threshold: Decimal::new(240000, 2),
                rate: Decimal::new(8, 2),
            },
        }
    }
}

/// A private pension fund entry in `pension_funds.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PensionFundConfig {
    /// Catalog code used to select the fund at hire time.
    pub code: String,
    /// Fund name.
    pub name: String,
    /// Obligatory contribution rate.
    pub obligatory_rate: Decimal,
    /// Insurance premium rate.
    pub premium_rate: Decimal,
    /// Flow commission rate.
    pub flow_commission_rate: Decimal,
}

/// The public scheme entry in `pension_funds.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicSchemeConfig {
    /// Catalog code.
    #[serde(default = "default_public_code")]
    pub code: String,
    /// Scheme name.
    pub name: String,
    /// Flat contribution rate.
    #[serde(default = "default_public_scheme_rate")]
    pub rate: Decimal,
}

fn default_public_code() -> String {
    PUBLIC_SCHEME_CODE.to_string()
}

/// Pension catalog file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PensionFundsConfig {
    /// Private funds, in the order they are offered.
    pub private_funds: Vec<PensionFundConfig>,
    /// The public scheme.
    pub public_scheme: PublicSchemeConfig,
}

impl PensionFundsConfig {
    /// Builds the scheme instances: private funds first, then the public scheme.
    pub fn into_schemes(self) -> Vec<PensionScheme> {
        let mut schemes: Vec<PensionScheme> = self
            .private_funds
            .into_iter()
            .map(|fund| PensionScheme::PrivateFund {
                code: fund.code,
                name: fund.name,
                obligatory_rate: fund.obligatory_rate,
                premium_rate: fund.premium_rate,
                flow_commission_rate: fund.flow_commission_rate,
            })
            .collect();

        schemes.push(PensionScheme::PublicScheme {
            code: self.public_scheme.code,
            name: self.public_scheme.name,
            rate: self.public_scheme.rate,
        });
        schemes
    }
}

/// The complete payroll configuration.
///
/// Each pension scheme is held once behind an [`Arc`]; every worker
/// affiliated to a scheme shares that instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollConfig {
    policy: PayrollPolicy,
    pension_schemes: Vec<Arc<PensionScheme>>,
}

impl PayrollConfig {
    /// Creates a configuration from a policy and the pension schemes on offer.
    pub fn new(policy: PayrollPolicy, pension_schemes: Vec<PensionScheme>) -> Self {
        Self {
            policy,
            pension_schemes: pension_schemes.into_iter().map(Arc::new).collect(),
        }
    }

    /// Returns the payroll policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Returns all pension schemes in catalog order.
    pub fn pension_schemes(&self) -> &[Arc<PensionScheme>] {
        &self.pension_schemes
    }

    /// Looks up a pension scheme by catalog code (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::PayrollConfig;
    ///
    /// let config = PayrollConfig::default();
    /// let scheme = config.pension_scheme("Habitat").unwrap();
    /// assert_eq!(scheme.to_string(), "AFP Habitat");
    /// assert!(config.pension_scheme("unknown").is_err());
    /// ```
    pub fn pension_scheme(&self, code: &str) -> PayrollResult<Arc<PensionScheme>> {
        self.pension_schemes
            .iter()
            .find(|scheme| scheme.code().eq_ignore_ascii_case(code))
            .cloned()
            .ok_or_else(|| PayrollError::PensionSchemeNotFound {
                code: code.to_string(),
            })
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self::new(PayrollPolicy::default(), PensionScheme::presets())
    }
}
