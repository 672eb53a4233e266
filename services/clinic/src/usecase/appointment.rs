use clinic_domain::sort::Sort;

use crate::domain::repository::AppointmentRepository;
use crate::domain::types::{
    Appointment, AppointmentInput, AppointmentSortBy, SortField, validate_appointment,
};
use crate::error::ClinicServiceError;
use crate::usecase::inclusion::Inclusion;

pub struct AppointmentService<R: AppointmentRepository> {
    pub repo: R,
}

impl<R: AppointmentRepository> AppointmentService<R> {
    /// Persist an appointment. Both the psychologist and the patient must exist.
    pub async fn include(&self, input: AppointmentInput) -> Inclusion<Appointment> {
        let result = match validate_appointment(&input) {
            Ok(()) => self.repo.save(&input).await,
            Err(e) => Err(e),
        };
        Inclusion::settle("appointment", result)
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, ClinicServiceError> {
        self.repo.list(None).await
    }

    /// All appointments ordered descending by `field`.
    pub async fn list_sorted(&self, field: &str) -> Result<Vec<Appointment>, ClinicServiceError> {
        let order = AppointmentSortBy::parse(field, Sort::Desc)?;
        self.repo.list(Some(order)).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Appointment>, ClinicServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn list_by_status(
        &self,
        completed: bool,
    ) -> Result<Vec<Appointment>, ClinicServiceError> {
        self.repo.list_by_status(completed).await
    }

    pub async fn list_by_psychologist(
        &self,
        psychologist_id: i32,
    ) -> Result<Vec<Appointment>, ClinicServiceError> {
        self.repo.list_by_psychologist(psychologist_id).await
    }

    pub async fn list_by_patient(
        &self,
        patient_id: i32,
    ) -> Result<Vec<Appointment>, ClinicServiceError> {
        self.repo.list_by_patient(patient_id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        let deleted = self.repo.delete(id).await?;
        tracing::info!(id, deleted, "appointment delete");
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<u64, ClinicServiceError> {
        self.repo.count().await
    }
}
