use clinic_domain::sort::Sort;

use crate::domain::repository::UserRepository;
use crate::domain::types::{PersonSortBy, SortField, User};
use crate::error::ClinicServiceError;

/// Read/delete access across patients and psychologists.
pub struct UserService<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub async fn list(&self) -> Result<Vec<User>, ClinicServiceError> {
        self.repo.list(None).await
    }

    pub async fn list_sorted(&self, field: &str) -> Result<Vec<User>, ClinicServiceError> {
        let order = PersonSortBy::parse(field, Sort::Asc)?;
        self.repo.list(Some(order)).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<User>, ClinicServiceError> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_age(&self, age: i32) -> Result<Vec<User>, ClinicServiceError> {
        self.repo.find_by_age(age).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        let deleted = self.repo.delete(id).await?;
        tracing::info!(id, deleted, "user delete");
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<u64, ClinicServiceError> {
        self.repo.count().await
    }
}
