use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::domain::types::{PersonInput, PsychologistInput};
use crate::error::ClinicServiceError;
use crate::handlers::body::{
    AddressBody, AppointmentIndex, AppointmentResponse, IdRef, ListQuery, PsychologistResponse,
    deletion_message, inclusion_message, psychologist_response, resolve_address,
};
use crate::state::AppState;

// ── GET /psicologo/listar ────────────────────────────────────────────────────

pub async fn list_psychologists(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PsychologistResponse>>, ClinicServiceError> {
    let service = state.psychologist_service();
    let psychologists = match query.ordenar_por.as_deref() {
        Some(field) => service.list_sorted(field).await?,
        None => service.list().await?,
    };
    let mut index = AppointmentIndex::load(&state).await?;
    Ok(Json(
        psychologists
            .into_iter()
            .map(|p| index.psychologist(p))
            .collect(),
    ))
}

// ── GET /psicologo/{id} ──────────────────────────────────────────────────────

pub async fn get_psychologist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<PsychologistResponse>>, ClinicServiceError> {
    match state.psychologist_service().get(id).await? {
        Some(p) => Ok(Json(Some(psychologist_response(&state, p).await?))),
        None => Ok(Json(None)),
    }
}

// ── GET /psicologo/crp/{crp} ─────────────────────────────────────────────────

pub async fn get_psychologist_by_crp(
    State(state): State<AppState>,
    Path(crp): Path<String>,
) -> Result<Json<Option<PsychologistResponse>>, ClinicServiceError> {
    match state
        .psychologist_service()
        .find_by_license_number(&crp)
        .await?
    {
        Some(p) => Ok(Json(Some(psychologist_response(&state, p).await?))),
        None => Ok(Json(None)),
    }
}

// ── GET /psicologo/{id}/atendimentos ─────────────────────────────────────────

pub async fn list_psychologist_appointments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<AppointmentResponse>>, ClinicServiceError> {
    let appointments = state
        .appointment_service()
        .list_by_psychologist(id)
        .await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

// ── POST /psicologo/incluir ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePsychologistRequest {
    #[serde(default)]
    pub id: Option<i32>,
    pub nome_completo: String,
    pub email: String,
    pub idade: i32,
    pub crp: String,
    /// Only the id is read; other approach fields are ignored.
    #[serde(default)]
    pub abordagem: Option<IdRef>,
    #[serde(default)]
    pub endereco: Option<AddressBody>,
    #[serde(default)]
    pub cep: Option<String>,
}

pub async fn create_psychologist(
    State(state): State<AppState>,
    Json(body): Json<CreatePsychologistRequest>,
) -> Result<String, ClinicServiceError> {
    let address = resolve_address(&state, body.endereco, body.cep).await?;
    let outcome = state
        .psychologist_service()
        .include(PsychologistInput {
            person: PersonInput {
                id: body.id,
                full_name: body.nome_completo,
                email: body.email,
                age: body.idade,
                address,
            },
            license_number: body.crp,
            approach_id: body.abordagem.map(|a| a.id),
        })
        .await;
    Ok(inclusion_message(&outcome))
}

// ── DELETE /psicologo/{id}/excluir ───────────────────────────────────────────

pub async fn delete_psychologist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ClinicServiceError> {
    state.psychologist_service().delete(id).await?;
    Ok(deletion_message(id))
}
