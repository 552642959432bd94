//! Family allowance calculation.
//!
//! Workers entitled to the family allowance receive a fixed share of the
//! statutory minimum living wage every period.

use crate::config::PayrollPolicy;
use crate::error::PayrollResult;
use crate::models::{IncomeEntry, Worker};

/// Label of the family allowance income line.
pub const FAMILY_ALLOWANCE_LABEL: &str = "Family Allowance";

/// Calculates the family allowance line for a worker.
///
/// Returns `None` when the worker is not entitled to it. Otherwise the
/// amount is `family_allowance_rate * minimum_living_wage` from the policy.
/// Fails only when that product overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_family_allowance;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{
///     Address, CommissionMode, Contract, DocumentType, IdentityDocument, PensionScheme, Person, Worker,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let person = Person {
///     document: IdentityDocument { document_type: DocumentType::Dni, number: "70112233".to_string() },
///     given_name: "Luis".to_string(),
///     paternal_surname: "Torres".to_string(),
///     maternal_surname: "Vega".to_string(),
///     address: Address {
///         street: "Calle Las Flores 120".to_string(),
///         reference: "N/A".to_string(),
///         district: "Surco".to_string(),
///         province: "Lima".to_string(),
///         department: "Lima".to_string(),
///     },
/// };
/// let contract = Contract::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), Decimal::from(1500)).unwrap();
/// let worker = Worker::new(person, contract, Arc::new(PensionScheme::prima()), true, CommissionMode::Flow);
///
/// let line = calculate_family_allowance(&worker, &PayrollPolicy::default()).unwrap().unwrap();
/// assert_eq!(line.amount, Decimal::from(113));
/// ```
pub fn calculate_family_allowance(
    worker: &Worker,
    policy: &PayrollPolicy,
) -> PayrollResult<Option<IncomeEntry>> {
    if !worker.has_family_allowance() {
        return Ok(None);
    }
    let amount = policy.family_allowance_amount()?;
    Ok(Some(IncomeEntry::new(FAMILY_ALLOWANCE_LABEL, amount)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::test_support::create_test_worker;
    use crate::models::PensionScheme;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_entitled_worker_gets_ten_percent_of_minimum_wage() {
        let worker = create_test_worker(dec("1500"), true, PensionScheme::integra());
        let line = calculate_family_allowance(&worker, &PayrollPolicy::default())
            .unwrap()
            .unwrap();

        assert_eq!(line.label, "Family Allowance");
        assert_eq!(line.amount, dec("113"));
    }

    #[test]
    fn test_not_entitled_worker_gets_nothing() {
        let worker = create_test_worker(dec("1500"), false, PensionScheme::integra());
        assert_eq!(
            calculate_family_allowance(&worker, &PayrollPolicy::default()),
            Ok(None)
        );
    }

    #[test]
    fn test_amount_follows_configured_minimum_wage() {
        let mut policy = PayrollPolicy::default();
        policy.minimum_living_wage = dec("1025");

        let worker = create_test_worker(dec("1500"), true, PensionScheme::integra());
        let line = calculate_family_allowance(&worker, &policy).unwrap().unwrap();
        assert_eq!(line.amount, dec("102.5"));
    }
}
