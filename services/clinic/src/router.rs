use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use clinic_core::health::{healthz, readyz};
use clinic_core::middleware::request_id_layer;

use crate::handlers::{
    appointment::{
        create_appointment, delete_appointment, get_appointment, list_appointments,
        list_appointments_by_status,
    },
    approach::{create_approach, delete_approach, get_approach, list_approaches},
    patient::{
        create_patient, delete_patient, get_patient, get_patient_by_cpf,
        list_patient_appointments, list_patients,
    },
    psychologist::{
        create_psychologist, delete_psychologist, get_psychologist, get_psychologist_by_crp,
        list_psychologist_appointments, list_psychologists,
    },
    user::{delete_user, get_user, list_users, list_users_by_age},
    views::{
        appointments_page, approaches_page, index, patients_page, psychologists_page,
        users_page,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Views
        .route("/", get(index))
        .route("/usuario/listagem", get(users_page))
        .route("/psicologo/listagem", get(psychologists_page))
        .route("/paciente/listagem", get(patients_page))
        .route("/abordagem/listagem", get(approaches_page))
        .route("/atendimento/listagem", get(appointments_page))
        // Approaches
        .route("/abordagem/listar", get(list_approaches))
        .route("/abordagem/incluir", post(create_approach))
        .route("/abordagem/{id}", get(get_approach))
        .route("/abordagem/{id}/excluir", delete(delete_approach))
        // Psychologists
        .route("/psicologo/listar", get(list_psychologists))
        .route("/psicologo/incluir", post(create_psychologist))
        .route("/psicologo/crp/{crp}", get(get_psychologist_by_crp))
        .route("/psicologo/{id}", get(get_psychologist))
        .route("/psicologo/{id}/atendimentos", get(list_psychologist_appointments))
        .route("/psicologo/{id}/excluir", delete(delete_psychologist))
        // Patients
        .route("/paciente/listar", get(list_patients))
        .route("/paciente/incluir", post(create_patient))
        .route("/paciente/cpf/{cpf}", get(get_patient_by_cpf))
        .route("/paciente/{id}", get(get_patient))
        .route("/paciente/{id}/atendimentos", get(list_patient_appointments))
        .route("/paciente/{id}/excluir", delete(delete_patient))
        // Appointments
        .route("/atendimento/listar", get(list_appointments))
        .route("/atendimento/incluir", post(create_appointment))
        .route("/atendimento/status/{status}", get(list_appointments_by_status))
        .route("/atendimento/{id}", get(get_appointment))
        .route("/atendimento/{id}/excluir", delete(delete_appointment))
        // Users
        .route("/usuario/listar", get(list_users))
        .route("/usuario/idade/{idade}", get(list_users_by_age))
        .route("/usuario/{id}", get(get_user))
        .route("/usuario/{id}/excluir", delete(delete_user))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
