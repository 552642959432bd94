//! Calculation logic for the payroll engine.
//!
//! This module contains the payslip line calculations (pension contribution,
//! family allowance, income tax withholding) and the [`PayslipEngine`] that
//! assembles them into a [`Payslip`](crate::models::Payslip).

mod family_allowance;
mod income_tax;
mod payslip;
mod pension_deduction;

pub use family_allowance::{FAMILY_ALLOWANCE_LABEL, calculate_family_allowance};
pub use income_tax::{INCOME_TAX_LABEL, calculate_income_tax};
pub use payslip::{BASE_SALARY_LABEL, PayslipEngine};
pub use pension_deduction::calculate_pension_deduction;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::models::{
        Address, CommissionMode, Contract, DocumentType, IdentityDocument, PensionScheme, Person,
        Worker,
    };

    pub fn create_test_worker(
        base_salary: Decimal,
        family_allowance: bool,
        scheme: PensionScheme,
    ) -> Worker {
        create_test_worker_with_mode(base_salary, family_allowance, scheme, CommissionMode::Flow)
    }

    pub fn create_test_worker_with_mode(
        base_salary: Decimal,
        family_allowance: bool,
        scheme: PensionScheme,
        commission_mode: CommissionMode,
    ) -> Worker {
        let person = Person {
            document: IdentityDocument {
                document_type: DocumentType::Dni,
                number: "70112233".to_string(),
            },
            given_name: "Luis".to_string(),
            paternal_surname: "Torres".to_string(),
            maternal_surname: "Vega".to_string(),
            address: Address {
                street: "Calle Las Flores 120".to_string(),
                reference: "N/A".to_string(),
                district: "Surco".to_string(),
                province: "Lima".to_string(),
                department: "Lima".to_string(),
            },
        };
        let contract =
            Contract::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), base_salary).unwrap();
        Worker::new(
            person,
            contract,
            Arc::new(scheme),
            family_allowance,
            commission_mode,
        )
    }
}
