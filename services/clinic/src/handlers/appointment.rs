use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::domain::types::AppointmentInput;
use crate::error::ClinicServiceError;
use crate::handlers::body::{
    AppointmentResponse, IdRef, ListQuery, deletion_message, inclusion_message,
};
use crate::state::AppState;

// ── GET /atendimento/listar ──────────────────────────────────────────────────

pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, ClinicServiceError> {
    let service = state.appointment_service();
    let appointments = match query.ordenar_por.as_deref() {
        Some(field) => service.list_sorted(field).await?,
        None => service.list().await?,
    };
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

// ── GET /atendimento/{id} ────────────────────────────────────────────────────

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<AppointmentResponse>>, ClinicServiceError> {
    let appointment = state.appointment_service().get(id).await?;
    Ok(Json(appointment.map(Into::into)))
}

// ── GET /atendimento/status/{status} ─────────────────────────────────────────

pub async fn list_appointments_by_status(
    State(state): State<AppState>,
    Path(completed): Path<bool>,
) -> Result<Json<Vec<AppointmentResponse>>, ClinicServiceError> {
    let appointments = state.appointment_service().list_by_status(completed).await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

// ── POST /atendimento/incluir ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    pub id: Option<i32>,
    pub psicologo: IdRef,
    pub paciente: IdRef,
    pub tipo_atendimento: String,
    pub atendimento_date: String,
    #[serde(default)]
    pub status_atendimento: bool,
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(body): Json<CreateAppointmentRequest>,
) -> String {
    let mut input = AppointmentInput::new(
        body.psicologo.id,
        body.paciente.id,
        body.atendimento_date,
        body.tipo_atendimento,
    )
    .with_status(body.status_atendimento.into());
    input.id = body.id;
    let outcome = state.appointment_service().include(input).await;
    inclusion_message(&outcome)
}

// ── DELETE /atendimento/{id}/excluir ─────────────────────────────────────────

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ClinicServiceError> {
    state.appointment_service().delete(id).await?;
    Ok(deletion_message(id))
}
