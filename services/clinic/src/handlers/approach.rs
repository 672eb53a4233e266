use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::domain::types::ApproachInput;
use crate::error::ClinicServiceError;
use crate::handlers::body::{
    ApproachBody, ListQuery, deletion_message, inclusion_message,
};
use crate::state::AppState;

// ── GET /abordagem/listar ────────────────────────────────────────────────────

pub async fn list_approaches(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ApproachBody>>, ClinicServiceError> {
    let service = state.approach_service();
    let approaches = match query.ordenar_por.as_deref() {
        Some(field) => service.list_sorted(field).await?,
        None => service.list().await?,
    };
    Ok(Json(approaches.into_iter().map(Into::into).collect()))
}

// ── GET /abordagem/{id} ──────────────────────────────────────────────────────

pub async fn get_approach(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<ApproachBody>>, ClinicServiceError> {
    let approach = state.approach_service().get(id).await?;
    Ok(Json(approach.map(Into::into)))
}

// ── POST /abordagem/incluir ──────────────────────────────────────────────────

pub async fn create_approach(
    State(state): State<AppState>,
    Json(body): Json<ApproachBody>,
) -> String {
    let outcome = state
        .approach_service()
        .include(ApproachInput {
            id: body.id,
            description: body.descricao,
        })
        .await;
    inclusion_message(&outcome)
}

// ── DELETE /abordagem/{id}/excluir ───────────────────────────────────────────

pub async fn delete_approach(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ClinicServiceError> {
    state.approach_service().delete(id).await?;
    Ok(deletion_message(id))
}
