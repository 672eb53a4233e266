use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::domain::types::{PatientInput, PersonInput};
use crate::error::ClinicServiceError;
use crate::handlers::body::{
    AddressBody, AppointmentIndex, AppointmentResponse, ListQuery, PatientResponse,
    deletion_message, inclusion_message, patient_response, resolve_address,
};
use crate::state::AppState;

// ── GET /paciente/listar ─────────────────────────────────────────────────────

pub async fn list_patients(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PatientResponse>>, ClinicServiceError> {
    let service = state.patient_service();
    let patients = match query.ordenar_por.as_deref() {
        Some(field) => service.list_sorted(field).await?,
        None => service.list().await?,
    };
    let mut index = AppointmentIndex::load(&state).await?;
    Ok(Json(patients.into_iter().map(|p| index.patient(p)).collect()))
}

// ── GET /paciente/{id} ───────────────────────────────────────────────────────

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<PatientResponse>>, ClinicServiceError> {
    match state.patient_service().get(id).await? {
        Some(p) => Ok(Json(Some(patient_response(&state, p).await?))),
        None => Ok(Json(None)),
    }
}

// ── GET /paciente/cpf/{cpf} ──────────────────────────────────────────────────

pub async fn get_patient_by_cpf(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<Option<PatientResponse>>, ClinicServiceError> {
    match state.patient_service().find_by_national_id(&cpf).await? {
        Some(p) => Ok(Json(Some(patient_response(&state, p).await?))),
        None => Ok(Json(None)),
    }
}

// ── GET /paciente/{id}/atendimentos ──────────────────────────────────────────

pub async fn list_patient_appointments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<AppointmentResponse>>, ClinicServiceError> {
    let appointments = state.appointment_service().list_by_patient(id).await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

// ── POST /paciente/incluir ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    #[serde(default)]
    pub id: Option<i32>,
    pub nome_completo: String,
    pub email: String,
    pub idade: i32,
    pub cpf: String,
    #[serde(default)]
    pub endereco: Option<AddressBody>,
    #[serde(default)]
    pub cep: Option<String>,
}

pub async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<CreatePatientRequest>,
) -> Result<String, ClinicServiceError> {
    let address = resolve_address(&state, body.endereco, body.cep).await?;
    let outcome = state
        .patient_service()
        .include(PatientInput {
            person: PersonInput {
                id: body.id,
                full_name: body.nome_completo,
                email: body.email,
                age: body.idade,
                address,
            },
            national_id: body.cpf,
        })
        .await;
    Ok(inclusion_message(&outcome))
}

// ── DELETE /paciente/{id}/excluir ────────────────────────────────────────────

pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ClinicServiceError> {
    state.patient_service().delete(id).await?;
    Ok(deletion_message(id))
}
