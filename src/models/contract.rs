//! Employment contract model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PayrollError, PayrollResult};

/// An employment contract: start date and monthly base salary.
///
/// Contracts are immutable; the salary is validated once at construction.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Contract;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = Contract::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     Decimal::new(1500, 0),
/// )
/// .unwrap();
/// assert_eq!(contract.base_salary(), Decimal::new(1500, 0));
///
/// assert!(Contract::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    start_date: NaiveDate,
    base_salary: Decimal,
}

impl Contract {
    /// Creates a contract, rejecting a negative base salary.
    pub fn new(start_date: NaiveDate, base_salary: Decimal) -> PayrollResult<Self> {
        if base_salary < Decimal::ZERO {
            return Err(PayrollError::InvalidAmount {
                field: "base_salary".to_string(),
                message: format!("must not be negative, got {}", base_salary),
            });
        }

        Ok(Self {
            start_date,
            base_salary,
        })
    }

    /// The date the contract starts.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The monthly base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_new_contract_keeps_values() {
        let contract = Contract::new(start(), dec("2750.50")).unwrap();
        assert_eq!(contract.start_date(), start());
        assert_eq!(contract.base_salary(), dec("2750.50"));
    }

    #[test]
    fn test_zero_salary_is_allowed() {
        assert!(Contract::new(start(), Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let result = Contract::new(start(), dec("-0.01"));
        match result {
            Err(PayrollError::InvalidAmount { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }
}
