use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::domain::types::User;
use crate::error::ClinicServiceError;
use crate::handlers::body::{
    AppointmentIndex, ListQuery, UserResponse, deletion_message, patient_response,
    psychologist_response,
};
use crate::state::AppState;

// ── GET /usuario/listar ──────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<UserResponse>>, ClinicServiceError> {
    let service = state.user_service();
    let users = match query.ordenar_por.as_deref() {
        Some(field) => service.list_sorted(field).await?,
        None => service.list().await?,
    };
    let mut index = AppointmentIndex::load(&state).await?;
    Ok(Json(users.into_iter().map(|u| index.user(u)).collect()))
}

// ── GET /usuario/{id} ────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<UserResponse>>, ClinicServiceError> {
    let response = match state.user_service().get(id).await? {
        Some(User::Patient(p)) => Some(UserResponse::Patient(patient_response(&state, p).await?)),
        Some(User::Psychologist(p)) => Some(UserResponse::Psychologist(
            psychologist_response(&state, p).await?,
        )),
        None => None,
    };
    Ok(Json(response))
}

// ── GET /usuario/idade/{idade} ───────────────────────────────────────────────

pub async fn list_users_by_age(
    State(state): State<AppState>,
    Path(age): Path<i32>,
) -> Result<Json<Vec<UserResponse>>, ClinicServiceError> {
    let users = state.user_service().find_by_age(age).await?;
    let mut index = AppointmentIndex::load(&state).await?;
    Ok(Json(users.into_iter().map(|u| index.user(u)).collect()))
}

// ── DELETE /usuario/{id}/excluir ─────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ClinicServiceError> {
    state.user_service().delete(id).await?;
    Ok(deletion_message(id))
}
