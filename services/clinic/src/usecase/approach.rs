use clinic_domain::sort::Sort;

use crate::domain::repository::ApproachRepository;
use crate::domain::types::{Approach, ApproachInput, ApproachSortBy, SortField, validate_approach};
use crate::error::ClinicServiceError;
use crate::usecase::inclusion::Inclusion;

pub struct ApproachService<R: ApproachRepository> {
    pub repo: R,
}

impl<R: ApproachRepository> ApproachService<R> {
    pub async fn include(&self, input: ApproachInput) -> Inclusion<Approach> {
        let result = match validate_approach(&input) {
            Ok(()) => self.repo.save(&input).await,
            Err(e) => Err(e),
        };
        Inclusion::settle("approach", result)
    }

    pub async fn list(&self) -> Result<Vec<Approach>, ClinicServiceError> {
        self.repo.list(None).await
    }

    /// All approaches ordered ascending by `field`.
    pub async fn list_sorted(&self, field: &str) -> Result<Vec<Approach>, ClinicServiceError> {
        let order = ApproachSortBy::parse(field, Sort::Asc)?;
        self.repo.list(Some(order)).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Approach>, ClinicServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        let deleted = self.repo.delete(id).await?;
        tracing::info!(id, deleted, "approach delete");
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<u64, ClinicServiceError> {
        self.repo.count().await
    }
}
