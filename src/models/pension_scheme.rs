//! Pension scheme models.
//!
//! A worker is affiliated to exactly one pension scheme, chosen at hire time.
//! There are two families:
//!
//! - **Private funds** charge an obligatory contribution, an insurance
//!   premium and a commission. The commission is either flow-based (a
//!   percentage of the period's gross pay) or balance-based ("mixed").
//! - **The public scheme** charges one flat rate on gross pay.
//!
//! The four private-fund presets are plain data, see [`PensionScheme::presets`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::entry::checked_sum;

/// Catalog code of the public scheme.
pub const PUBLIC_SCHEME_CODE: &str = "onp";

/// Default flat rate of the public scheme (13%).
pub fn default_public_scheme_rate() -> Decimal {
    Decimal::new(13, 2)
}

/// How a private fund charges its commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionMode {
    /// Commission computed on the period's gross pay.
    Flow,
    /// Commission computed on the accumulated balance.
    Mixed,
}

impl CommissionMode {
    /// Returns true for flow-based commission.
    pub fn is_flow(self) -> bool {
        self == CommissionMode::Flow
    }
}

impl fmt::Display for CommissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommissionMode::Flow => f.write_str("Flow Commission"),
            CommissionMode::Mixed => f.write_str("Mixed Commission"),
        }
    }
}

/// A pension scheme and its deduction rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PensionScheme {
    /// A privately administered pension fund.
    PrivateFund {
        /// Catalog code (e.g. "integra").
        code: String,
        /// Fund name (e.g. "Integra").
        name: String,
        /// Obligatory contribution rate on gross pay.
        obligatory_rate: Decimal,
        /// Insurance premium rate on gross pay.
        premium_rate: Decimal,
        /// Flow commission rate on gross pay.
        flow_commission_rate: Decimal,
    },
    /// The state-administered scheme.
    PublicScheme {
        /// Catalog code (e.g. "onp").
        code: String,
        /// Scheme name (e.g. "ONP").
        name: String,
        /// Flat rate on gross pay.
        rate: Decimal,
    },
}

impl PensionScheme {
    /// Creates a private fund whose code is its lowercased name.
    pub fn private_fund(
        name: &str,
        obligatory_rate: Decimal,
        premium_rate: Decimal,
        flow_commission_rate: Decimal,
    ) -> Self {
        PensionScheme::PrivateFund {
            code: name.to_lowercase(),
            name: name.to_string(),
            obligatory_rate,
            premium_rate,
            flow_commission_rate,
        }
    }

    /// Creates the public scheme with the given flat rate.
    pub fn public_scheme(rate: Decimal) -> Self {
        PensionScheme::PublicScheme {
            code: PUBLIC_SCHEME_CODE.to_string(),
            name: "ONP".to_string(),
            rate,
        }
    }

    /// AFP Integra preset.
    pub fn integra() -> Self {
        Self::private_fund("Integra", Decimal::new(10, 2), Decimal::new(184, 4), Decimal::new(155, 4))
    }

    /// AFP Prima preset.
    pub fn prima() -> Self {
        Self::private_fund("Prima", Decimal::new(10, 2), Decimal::new(184, 4), Decimal::new(160, 4))
    }

    /// AFP Habitat preset.
    pub fn habitat() -> Self {
        Self::private_fund("Habitat", Decimal::new(10, 2), Decimal::new(184, 4), Decimal::new(147, 4))
    }

    /// AFP Profuturo preset.
    pub fn profuturo() -> Self {
        Self::private_fund("Profuturo", Decimal::new(10, 2), Decimal::new(184, 4), Decimal::new(162, 4))
    }

    /// The four private-fund presets followed by the public scheme at its default rate.
    pub fn presets() -> Vec<PensionScheme> {
        vec![
            Self::integra(),
            Self::prima(),
            Self::habitat(),
            Self::profuturo(),
            Self::public_scheme(default_public_scheme_rate()),
        ]
    }

    /// The catalog code.
    pub fn code(&self) -> &str {
        match self {
            PensionScheme::PrivateFund { code, .. } | PensionScheme::PublicScheme { code, .. } => {
                code
            }
        }
    }

    /// Returns true for private funds.
    pub fn is_private_fund(&self) -> bool {
        matches!(self, PensionScheme::PrivateFund { .. })
    }

    /// Computes the pension deduction on `gross_pay`.
    ///
    /// For the public scheme this is `gross_pay * rate` and
    /// `use_flow_commission` is ignored. For a private fund it is the
    /// obligatory contribution plus the insurance premium, plus the flow
    /// commission only when `use_flow_commission` is true. A mixed
    /// commission contributes nothing here.
    ///
    /// Fails with [`PayrollError::AmountOverflow`] when a term leaves the
    /// decimal range.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PensionScheme;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let gross = Decimal::from(3000);
    /// let integra = PensionScheme::integra();
    /// assert_eq!(integra.compute_deduction(gross, true)?, Decimal::from_str("401.7").unwrap());
    /// assert_eq!(integra.compute_deduction(gross, false)?, Decimal::from_str("355.2").unwrap());
    ///
    /// let public = PensionScheme::public_scheme(Decimal::from_str("0.13").unwrap());
    /// assert_eq!(public.compute_deduction(gross, true)?, Decimal::from(390));
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn compute_deduction(
        &self,
        gross_pay: Decimal,
        use_flow_commission: bool,
    ) -> PayrollResult<Decimal> {
        let field = format!("Contribution {}", self);
        let apply = |rate: Decimal| {
            gross_pay
                .checked_mul(rate)
                .ok_or_else(|| PayrollError::AmountOverflow {
                    field: field.clone(),
                })
        };

        match self {
            PensionScheme::PublicScheme { rate, .. } => apply(*rate),
            PensionScheme::PrivateFund {
                obligatory_rate,
                premium_rate,
                flow_commission_rate,
                ..
            } => {
                let contribution = apply(*obligatory_rate)?;
                let premium = apply(*premium_rate)?;
                let commission = if use_flow_commission {
                    apply(*flow_commission_rate)?
                } else {
                    Decimal::ZERO
                };
                checked_sum([contribution, premium, commission].into_iter(), &field)
            }
        }
    }
}

impl fmt::Display for PensionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PensionScheme::PrivateFund { name, .. } => write!(f, "AFP {}", name),
            PensionScheme::PublicScheme { name, .. } => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_public_scheme_applies_flat_rate() {
        let scheme = PensionScheme::public_scheme(dec("0.13"));
        assert_eq!(scheme.compute_deduction(dec("1613"), false), Ok(dec("209.69")));
    }

    #[test]
    fn test_public_scheme_ignores_commission_flag() {
        let scheme = PensionScheme::public_scheme(dec("0.13"));
        assert_eq!(
            scheme.compute_deduction(dec("1200"), true),
            scheme.compute_deduction(dec("1200"), false)
        );
        assert_eq!(scheme.compute_deduction(dec("1200"), true), Ok(dec("156")));
    }

    #[test]
    fn test_private_fund_with_flow_commission() {
        // 300 + 55.2 + 46.5
        let scheme = PensionScheme::integra();
        assert_eq!(scheme.compute_deduction(dec("3000"), true), Ok(dec("401.7")));
    }

    #[test]
    fn test_private_fund_mixed_commission_omits_commission_term() {
        // 300 + 55.2
        let scheme = PensionScheme::integra();
        assert_eq!(scheme.compute_deduction(dec("3000"), false), Ok(dec("355.2")));
    }

    #[test]
    fn test_private_fund_zero_gross_pay() {
        for scheme in PensionScheme::presets() {
            assert_eq!(scheme.compute_deduction(Decimal::ZERO, true), Ok(Decimal::ZERO));
        }
    }

    #[test]
    fn test_deduction_overflow_is_an_error() {
        let scheme = PensionScheme::public_scheme(dec("2"));
        assert_eq!(
            scheme.compute_deduction(Decimal::MAX, false),
            Err(PayrollError::AmountOverflow {
                field: "Contribution ONP".to_string()
            })
        );

        // Each term fits, their sum does not.
        let fund = PensionScheme::private_fund("Heavy", dec("0.6"), dec("0.6"), Decimal::ZERO);
        assert!(fund.compute_deduction(Decimal::MAX, false).is_err());
        assert!(PensionScheme::integra().compute_deduction(Decimal::MAX, true).is_ok());
    }

    #[test]
    fn test_preset_flow_commission_rates() {
        let rates: Vec<Decimal> = PensionScheme::presets()
            .iter()
            .filter_map(|scheme| match scheme {
                PensionScheme::PrivateFund {
                    obligatory_rate,
                    premium_rate,
                    flow_commission_rate,
                    ..
                } => {
                    assert_eq!(*obligatory_rate, dec("0.10"));
                    assert_eq!(*premium_rate, dec("0.0184"));
                    Some(*flow_commission_rate)
                }
                PensionScheme::PublicScheme { .. } => None,
            })
            .collect();

        assert_eq!(
            rates,
            vec![dec("0.0155"), dec("0.0160"), dec("0.0147"), dec("0.0162")]
        );
    }

    #[test]
    fn test_preset_codes() {
        let codes: Vec<String> = PensionScheme::presets()
            .iter()
            .map(|s| s.code().to_string())
            .collect();
        assert_eq!(codes, vec!["integra", "prima", "habitat", "profuturo", "onp"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(PensionScheme::prima().to_string(), "AFP Prima");
        assert_eq!(
            PensionScheme::public_scheme(default_public_scheme_rate()).to_string(),
            "ONP"
        );
        assert_eq!(CommissionMode::Flow.to_string(), "Flow Commission");
    }

    #[test]
    fn test_is_private_fund() {
        assert!(PensionScheme::habitat().is_private_fund());
        assert!(!PensionScheme::public_scheme(dec("0.13")).is_private_fund());
    }

    #[test]
    fn test_serialize_tagged_variant() {
        let json = serde_json::to_value(PensionScheme::public_scheme(dec("0.13"))).unwrap();
        assert_eq!(json["kind"], "public_scheme");
        assert_eq!(json["code"], "onp");
        assert_eq!(json["rate"], "0.13");
    }
}
