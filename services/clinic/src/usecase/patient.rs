use clinic_domain::sort::Sort;

use crate::domain::repository::PatientRepository;
use crate::domain::types::{Patient, PatientInput, PatientSortBy, SortField, validate_patient};
use crate::error::ClinicServiceError;
use crate::usecase::inclusion::Inclusion;

pub struct PatientService<R: PatientRepository> {
    pub repo: R,
}

impl<R: PatientRepository> PatientService<R> {
    pub async fn include(&self, input: PatientInput) -> Inclusion<Patient> {
        let result = match validate_patient(&input) {
            Ok(()) => self.repo.save(&input).await,
            Err(e) => Err(e),
        };
        Inclusion::settle("patient", result)
    }

    pub async fn list(&self) -> Result<Vec<Patient>, ClinicServiceError> {
        self.repo.list(None).await
    }

    pub async fn list_sorted(&self, field: &str) -> Result<Vec<Patient>, ClinicServiceError> {
        let order = PatientSortBy::parse(field, Sort::Asc)?;
        self.repo.list(Some(order)).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Patient>, ClinicServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_national_id(
        &self,
        cpf: &str,
    ) -> Result<Option<Patient>, ClinicServiceError> {
        self.repo.find_by_national_id(cpf.trim()).await
    }

    /// Removes the patient together with its appointments.
    pub async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        let deleted = self.repo.delete(id).await?;
        tracing::info!(id, deleted, "patient delete");
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<u64, ClinicServiceError> {
        self.repo.count().await
    }
}
