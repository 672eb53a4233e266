#![allow(async_fn_in_trait)]

use clinic_domain::postal_code::PostalCode;

use crate::domain::types::{
    AddressInput, Appointment, AppointmentInput, AppointmentSortBy, Approach, ApproachInput,
    ApproachSortBy, OrderBy, Patient, PatientInput, PatientSortBy, PersonSortBy, Psychologist,
    PsychologistInput, PsychologistSortBy, User,
};
use crate::error::ClinicServiceError;

/// Repository for treatment approaches.
pub trait ApproachRepository: Send + Sync {
    /// Insert, or overwrite when `input.id` names an existing record.
    async fn save(&self, input: &ApproachInput) -> Result<Approach, ClinicServiceError>;
    async fn list(
        &self,
        order: Option<OrderBy<ApproachSortBy>>,
    ) -> Result<Vec<Approach>, ClinicServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Approach>, ClinicServiceError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError>;
    async fn count(&self) -> Result<u64, ClinicServiceError>;
}

/// Repository for patients. Saves write the user, address and patient rows together.
pub trait PatientRepository: Send + Sync {
    async fn save(&self, input: &PatientInput) -> Result<Patient, ClinicServiceError>;
    async fn list(
        &self,
        order: Option<OrderBy<PatientSortBy>>,
    ) -> Result<Vec<Patient>, ClinicServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Patient>, ClinicServiceError>;
    async fn find_by_national_id(&self, cpf: &str)
    -> Result<Option<Patient>, ClinicServiceError>;
    /// Deletes the patient, its appointments and its address.
    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError>;
    async fn count(&self) -> Result<u64, ClinicServiceError>;
}

/// Repository for psychologists.
pub trait PsychologistRepository: Send + Sync {
    async fn save(&self, input: &PsychologistInput) -> Result<Psychologist, ClinicServiceError>;
    async fn list(
        &self,
        order: Option<OrderBy<PsychologistSortBy>>,
    ) -> Result<Vec<Psychologist>, ClinicServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Psychologist>, ClinicServiceError>;
    async fn find_by_license_number(
        &self,
        crp: &str,
    ) -> Result<Option<Psychologist>, ClinicServiceError>;
    /// Deletes the psychologist, its appointments and its address.
    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError>;
    async fn count(&self) -> Result<u64, ClinicServiceError>;
}

/// Repository for appointments.
pub trait AppointmentRepository: Send + Sync {
    /// Fails with `PsychologistNotFound` / `PatientNotFound` on dangling references.
    async fn save(&self, input: &AppointmentInput) -> Result<Appointment, ClinicServiceError>;
    async fn list(
        &self,
        order: Option<OrderBy<AppointmentSortBy>>,
    ) -> Result<Vec<Appointment>, ClinicServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, ClinicServiceError>;
    async fn list_by_status(&self, completed: bool)
    -> Result<Vec<Appointment>, ClinicServiceError>;
    async fn list_by_psychologist(
        &self,
        psychologist_id: i32,
    ) -> Result<Vec<Appointment>, ClinicServiceError>;
    async fn list_by_patient(&self, patient_id: i32)
    -> Result<Vec<Appointment>, ClinicServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError>;
    async fn count(&self) -> Result<u64, ClinicServiceError>;
}

/// Read/delete access to users of any kind.
pub trait UserRepository: Send + Sync {
    async fn list(&self, order: Option<OrderBy<PersonSortBy>>)
    -> Result<Vec<User>, ClinicServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ClinicServiceError>;
    async fn find_by_age(&self, age: i32) -> Result<Vec<User>, ClinicServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError>;
    async fn count(&self) -> Result<u64, ClinicServiceError>;
}

/// Port for the external postal-code lookup.
pub trait AddressLookup: Send + Sync {
    /// `Ok(None)` when the upstream does not know the postal code.
    async fn lookup(&self, cep: &PostalCode) -> Result<Option<AddressInput>, ClinicServiceError>;
}
