//! Employer model: the company and its roster of workers.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::{TerminationReason, Worker, WorkerStatus};

/// The company running payroll.
///
/// The roster is append-only and kept in hiring order. Workers are never
/// removed; terminating one only changes its status.
#[derive(Debug, Clone, PartialEq)]
pub struct Employer {
    tax_id: String,
    legal_name: String,
    fiscal_address: String,
    workers: Vec<Worker>,
}

/// Employer identification data without the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerProfile {
    /// Tax identification number.
    pub tax_id: String,
    /// Registered legal name.
    pub legal_name: String,
    /// Fiscal address.
    pub fiscal_address: String,
}

impl Employer {
    /// Creates an employer with an empty roster.
    pub fn new(
        tax_id: impl Into<String>,
        legal_name: impl Into<String>,
        fiscal_address: impl Into<String>,
    ) -> Self {
        Self {
            tax_id: tax_id.into(),
            legal_name: legal_name.into(),
            fiscal_address: fiscal_address.into(),
            workers: Vec::new(),
        }
    }

    /// Tax identification number.
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Registered legal name.
    pub fn legal_name(&self) -> &str {
        &self.legal_name
    }

    /// Fiscal address.
    pub fn fiscal_address(&self) -> &str {
        &self.fiscal_address
    }

    /// Identification data as a serializable value.
    pub fn profile(&self) -> EmployerProfile {
        EmployerProfile {
            tax_id: self.tax_id.clone(),
            legal_name: self.legal_name.clone(),
            fiscal_address: self.fiscal_address.clone(),
        }
    }

    /// Appends a worker to the roster and returns its roster position.
    ///
    /// Document numbers are not checked for uniqueness.
    pub fn hire(&mut self, worker: Worker) -> usize {
        info!(
            document_number = %worker.document_number(),
            name = %worker.full_name(),
            pension_scheme = %worker.pension_scheme(),
            "Worker hired"
        );
        self.workers.push(worker);
        self.workers.len() - 1
    }

    /// The full roster in hiring order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Workers with the given status, in hiring order.
    ///
    /// The iterator is evaluated lazily against the current roster, so
    /// calling this again after a mutation reflects the change.
    pub fn workers_by_status(&self, status: WorkerStatus) -> impl Iterator<Item = &Worker> + '_ {
        self.workers.iter().filter(move |w| w.status() == status)
    }

    /// Number of workers with the given status.
    pub fn count_by_status(&self, status: WorkerStatus) -> usize {
        self.workers_by_status(status).count()
    }

    /// Selects the active worker at `index` (0-based, over active workers only).
    pub fn active_worker(&self, index: usize) -> PayrollResult<&Worker> {
        let available = self.ensure_active_workers()?;
        self.workers_by_status(WorkerStatus::Active)
            .nth(index)
            .ok_or(PayrollError::WorkerNotFound { index, available })
    }

    /// Mutable variant of [`Employer::active_worker`].
    pub fn active_worker_mut(&mut self, index: usize) -> PayrollResult<&mut Worker> {
        let available = self.ensure_active_workers()?;
        self.workers
            .iter_mut()
            .filter(|w| w.is_active())
            .nth(index)
            .ok_or(PayrollError::WorkerNotFound { index, available })
    }

    /// Terminates the active worker at `index` and returns it.
    pub fn terminate_worker(
        &mut self,
        index: usize,
        reason: TerminationReason,
    ) -> PayrollResult<&Worker> {
        let worker = self.active_worker_mut(index)?;
        worker.terminate(reason)?;
        Ok(worker)
    }

    fn ensure_active_workers(&self) -> PayrollResult<usize> {
        match self.count_by_status(WorkerStatus::Active) {
            0 => Err(PayrollError::NoEligibleWorker),
            available => Ok(available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Address, CommissionMode, Contract, DocumentType, IdentityDocument, PensionScheme, Person,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn create_test_worker(document_number: &str) -> Worker {
        let person = Person {
            document: IdentityDocument {
                document_type: DocumentType::Dni,
                number: document_number.to_string(),
            },
            given_name: "Ana".to_string(),
            paternal_surname: "Flores".to_string(),
            maternal_surname: "Rojas".to_string(),
            address: Address {
                street: "Av. Brasil 900".to_string(),
                reference: "N/A".to_string(),
                district: "Breña".to_string(),
                province: "Lima".to_string(),
                department: "Lima".to_string(),
            },
        };
        let contract = Contract::new(
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
            Decimal::from(1800),
        )
        .unwrap();
        Worker::new(
            person,
            contract,
            Arc::new(PensionScheme::public_scheme(Decimal::new(13, 2))),
            false,
            CommissionMode::Flow,
        )
    }

    fn create_test_employer() -> Employer {
        Employer::new("20123456789", "Textiles Andinos S.A.C.", "Av. Industrial 300, Ate")
    }

    fn documents<'a>(workers: impl Iterator<Item = &'a Worker>) -> Vec<String> {
        workers.map(|w| w.document_number().to_string()).collect()
    }

    #[test]
    fn test_new_employer_has_empty_roster() {
        let employer = create_test_employer();
        assert_eq!(employer.tax_id(), "20123456789");
        assert_eq!(employer.legal_name(), "Textiles Andinos S.A.C.");
        assert_eq!(employer.fiscal_address(), "Av. Industrial 300, Ate");
        assert!(employer.workers().is_empty());
    }

    #[test]
    fn test_hire_appends_in_order_and_allows_duplicates() {
        let mut employer = create_test_employer();
        assert_eq!(employer.hire(create_test_worker("111")), 0);
        assert_eq!(employer.hire(create_test_worker("222")), 1);
        assert_eq!(employer.hire(create_test_worker("111")), 2);

        assert_eq!(documents(employer.workers().iter()), vec!["111", "222", "111"]);
    }

    #[test]
    fn test_workers_by_status_is_restartable() {
        let mut employer = create_test_employer();
        employer.hire(create_test_worker("111"));
        employer.hire(create_test_worker("222"));

        let first: Vec<&Worker> = employer.workers_by_status(WorkerStatus::Active).collect();
        let second: Vec<&Worker> = employer.workers_by_status(WorkerStatus::Active).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_workers_by_status_reflects_termination() {
        let mut employer = create_test_employer();
        employer.hire(create_test_worker("111"));
        employer.hire(create_test_worker("222"));
        employer.hire(create_test_worker("333"));

        employer
            .terminate_worker(1, TerminationReason::Dismissal)
            .unwrap();

        assert_eq!(
            documents(employer.workers_by_status(WorkerStatus::Active)),
            vec!["111", "333"]
        );
        assert_eq!(
            documents(employer.workers_by_status(WorkerStatus::Terminated)),
            vec!["222"]
        );
        assert_eq!(employer.workers().len(), 3);
    }

    #[test]
    fn test_active_selection_skips_terminated_workers() {
        let mut employer = create_test_employer();
        employer.hire(create_test_worker("111"));
        employer.hire(create_test_worker("222"));
        employer
            .terminate_worker(0, TerminationReason::ContractEnd)
            .unwrap();

        assert_eq!(employer.active_worker(0).unwrap().document_number(), "222");
        assert_eq!(
            employer.active_worker(1),
            Err(PayrollError::WorkerNotFound {
                index: 1,
                available: 1
            })
        );
    }

    #[test]
    fn test_selection_with_no_active_workers() {
        let mut employer = create_test_employer();
        assert_eq!(
            employer.active_worker(0).err(),
            Some(PayrollError::NoEligibleWorker)
        );

        employer.hire(create_test_worker("111"));
        employer
            .terminate_worker(0, TerminationReason::Dismissal)
            .unwrap();

        assert_eq!(
            employer.active_worker_mut(0).err(),
            Some(PayrollError::NoEligibleWorker)
        );
        assert_eq!(
            employer
                .terminate_worker(0, TerminationReason::Dismissal)
                .err(),
            Some(PayrollError::NoEligibleWorker)
        );
    }

    #[test]
    fn test_count_by_status() {
        let mut employer = create_test_employer();
        employer.hire(create_test_worker("111"));
        employer.hire(create_test_worker("222"));
        employer
            .terminate_worker(0, TerminationReason::VoluntaryResignation)
            .unwrap();

        assert_eq!(employer.count_by_status(WorkerStatus::Active), 1);
        assert_eq!(employer.count_by_status(WorkerStatus::Terminated), 1);
    }

    #[test]
    fn test_profile() {
        let profile = create_test_employer().profile();
        assert_eq!(profile.tax_id, "20123456789");
        assert_eq!(profile.legal_name, "Textiles Andinos S.A.C.");
    }
}
