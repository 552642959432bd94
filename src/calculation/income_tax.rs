//! Income tax withholding.
//!
//! Fifth-category income tax is withheld on the part of gross pay that
//! exceeds the policy threshold.

use rust_decimal::Decimal;

use crate::config::IncomeTaxPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::DeductionEntry;

/// Label of the income tax deduction line.
pub const INCOME_TAX_LABEL: &str = "Fifth-Category Income Tax";

/// Calculates the income tax deduction for a gross pay.
///
/// Returns `None` unless `gross_pay` is strictly greater than the threshold.
/// Otherwise the amount is `(gross_pay - threshold) * rate`. Fails only when
/// that arithmetic overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// let line = calculate_income_tax(Decimal::from(3000), &policy.income_tax)?.unwrap();
/// assert_eq!(line.amount, Decimal::from(48));
///
/// assert!(calculate_income_tax(Decimal::from(2400), &policy.income_tax)?.is_none());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn calculate_income_tax(
    gross_pay: Decimal,
    policy: &IncomeTaxPolicy,
) -> PayrollResult<Option<DeductionEntry>> {
    if gross_pay <= policy.threshold {
        return Ok(None);
    }

    let amount = gross_pay
        .checked_sub(policy.threshold)
        .and_then(|taxable| taxable.checked_mul(policy.rate))
        .ok_or_else(|| PayrollError::AmountOverflow {
            field: INCOME_TAX_LABEL.to_string(),
        })?;
    Ok(Some(DeductionEntry::new(INCOME_TAX_LABEL, amount)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollPolicy;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn policy() -> IncomeTaxPolicy {
        PayrollPolicy::default().income_tax
    }

    #[test]
    fn test_no_tax_at_or_below_threshold() {
        assert_eq!(calculate_income_tax(dec("1613"), &policy()), Ok(None));
        assert_eq!(calculate_income_tax(dec("2400"), &policy()), Ok(None));
        assert_eq!(calculate_income_tax(Decimal::ZERO, &policy()), Ok(None));
    }

    #[test]
    fn test_tax_on_excess_over_threshold() {
        let line = calculate_income_tax(dec("3000"), &policy()).unwrap().unwrap();
        assert_eq!(line.label, "Fifth-Category Income Tax");
        assert_eq!(line.amount, dec("48"));
    }

    #[test]
    fn test_tax_just_above_threshold() {
        let line = calculate_income_tax(dec("2400.01"), &policy()).unwrap().unwrap();
        assert_eq!(line.amount, dec("0.0008"));
    }

    #[test]
    fn test_tax_at_decimal_limit_does_not_panic() {
        let line = calculate_income_tax(Decimal::MAX, &policy()).unwrap().unwrap();
        assert!(line.amount > Decimal::ZERO);

        let steep = IncomeTaxPolicy {
            threshold: Decimal::ZERO,
            rate: dec("2"),
        };
        assert_eq!(
            calculate_income_tax(Decimal::MAX, &steep),
            Err(PayrollError::AmountOverflow {
                field: INCOME_TAX_LABEL.to_string()
            })
        );
    }
}
