use clinic_domain::sort::Sort;

use crate::domain::repository::PsychologistRepository;
use crate::domain::types::{
    Psychologist, PsychologistInput, PsychologistSortBy, SortField, validate_psychologist,
};
use crate::error::ClinicServiceError;
use crate::usecase::inclusion::Inclusion;

pub struct PsychologistService<R: PsychologistRepository> {
    pub repo: R,
}

impl<R: PsychologistRepository> PsychologistService<R> {
    /// Persist a psychologist. A referenced approach must already exist.
    pub async fn include(&self, input: PsychologistInput) -> Inclusion<Psychologist> {
        let result = match validate_psychologist(&input) {
            Ok(()) => self.repo.save(&input).await,
            Err(e) => Err(e),
        };
        Inclusion::settle("psychologist", result)
    }

    pub async fn list(&self) -> Result<Vec<Psychologist>, ClinicServiceError> {
        self.repo.list(None).await
    }

    pub async fn list_sorted(&self, field: &str) -> Result<Vec<Psychologist>, ClinicServiceError> {
        let order = PsychologistSortBy::parse(field, Sort::Asc)?;
        self.repo.list(Some(order)).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Psychologist>, ClinicServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_license_number(
        &self,
        crp: &str,
    ) -> Result<Option<Psychologist>, ClinicServiceError> {
        self.repo.find_by_license_number(crp.trim()).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        let deleted = self.repo.delete(id).await?;
        tracing::info!(id, deleted, "psychologist delete");
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<u64, ClinicServiceError> {
        self.repo.count().await
    }
}
