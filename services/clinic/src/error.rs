use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clinic_domain::postal_code::InvalidPostalCode;

/// Clinic service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ClinicServiceError {
    #[error("{0} must not be blank")]
    BlankField(&'static str),
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("age must be at least 18")]
    Underage,
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("cpf already registered")]
    NationalIdTaken,
    #[error("crp already registered")]
    LicenseNumberTaken,
    #[error("approach not found")]
    ApproachNotFound,
    #[error("psychologist not found")]
    PsychologistNotFound,
    #[error("patient not found")]
    PatientNotFound,
    #[error("approach is referenced by a psychologist")]
    ApproachInUse,
    #[error(transparent)]
    InvalidPostalCode(#[from] InvalidPostalCode),
    #[error("address lookup failed")]
    AddressLookup(#[from] reqwest::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ClinicServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BlankField(_) => "BLANK_FIELD",
            Self::FieldTooLong { .. } => "FIELD_TOO_LONG",
            Self::Underage => "UNDERAGE",
            Self::UnknownSortField(_) => "UNKNOWN_SORT_FIELD",
            Self::NationalIdTaken => "NATIONAL_ID_TAKEN",
            Self::LicenseNumberTaken => "LICENSE_NUMBER_TAKEN",
            Self::ApproachNotFound => "APPROACH_NOT_FOUND",
            Self::PsychologistNotFound => "PSYCHOLOGIST_NOT_FOUND",
            Self::PatientNotFound => "PATIENT_NOT_FOUND",
            Self::ApproachInUse => "APPROACH_IN_USE",
            Self::InvalidPostalCode(_) => "INVALID_POSTAL_CODE",
            Self::AddressLookup(_) => "ADDRESS_LOOKUP_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BlankField(_)
            | Self::FieldTooLong { .. }
            | Self::Underage
            | Self::UnknownSortField(_)
            | Self::InvalidPostalCode(_) => StatusCode::BAD_REQUEST,
            Self::ApproachNotFound
            | Self::PsychologistNotFound
            | Self::PatientNotFound => StatusCode::NOT_FOUND,
            Self::NationalIdTaken | Self::LicenseNumberTaken | Self::ApproachInUse => {
                StatusCode::CONFLICT
            }
            Self::AddressLookup(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ClinicServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            Self::AddressLookup(e) => {
                tracing::error!(error = %e, kind = "ADDRESS_LOOKUP_FAILED", "upstream error");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
