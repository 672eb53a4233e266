//! Server-rendered summary pages.

use std::fmt::{Display, Write as _};

use axum::{extract::State, response::Html};

use crate::error::ClinicServiceError;
use crate::state::AppState;

struct Counts {
    users: u64,
    psychologists: u64,
    patients: u64,
    approaches: u64,
    appointments: u64,
}

impl Counts {
    async fn load(state: &AppState) -> Result<Self, ClinicServiceError> {
        Ok(Self {
            users: state.user_service().count().await?,
            psychologists: state.psychologist_service().count().await?,
            patients: state.patient_service().count().await?,
            approaches: state.approach_service().count().await?,
            appointments: state.appointment_service().count().await?,
        })
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render(counts: &Counts, listing: Option<(&str, Vec<String>)>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head><meta charset=\"utf-8\"><title>Clínica</title></head>\n<body>\n",
    );
    html.push_str("<nav>\n");
    for (href, label) in [
        ("/", "Home"),
        ("/usuario/listagem", "Usuários"),
        ("/psicologo/listagem", "Psicólogos"),
        ("/paciente/listagem", "Pacientes"),
        ("/abordagem/listagem", "Abordagens"),
        ("/atendimento/listagem", "Atendimentos"),
    ] {
        let _ = writeln!(html, "<a href=\"{href}\">{label}</a>");
    }
    html.push_str("</nav>\n<ul id=\"counts\">\n");
    for (label, n) in [
        ("Usuários", counts.users),
        ("Psicólogos", counts.psychologists),
        ("Pacientes", counts.patients),
        ("Abordagens", counts.approaches),
        ("Atendimentos", counts.appointments),
    ] {
        let _ = writeln!(html, "<li>{label}: {n}</li>");
    }
    html.push_str("</ul>\n");
    if let Some((title, rows)) = listing {
        let _ = writeln!(html, "<h2>{}</h2>\n<ul id=\"listing\">", escape(title));
        for row in rows {
            let _ = writeln!(html, "<li>{}</li>", escape(&row));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

async fn listing_page<T: Display>(
    state: &AppState,
    title: &str,
    records: Vec<T>,
) -> Result<Html<String>, ClinicServiceError> {
    let counts = Counts::load(state).await?;
    let rows = records.iter().map(ToString::to_string).collect();
    Ok(Html(render(&counts, Some((title, rows)))))
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ClinicServiceError> {
    let counts = Counts::load(&state).await?;
    Ok(Html(render(&counts, None)))
}

// ── GET /{entity}/listagem ───────────────────────────────────────────────────

pub async fn users_page(State(state): State<AppState>) -> Result<Html<String>, ClinicServiceError> {
    let users = state.user_service().list_sorted("nomeCompleto").await?;
    listing_page(&state, "Usuários", users).await
}

pub async fn psychologists_page(
    State(state): State<AppState>,
) -> Result<Html<String>, ClinicServiceError> {
    let psychologists = state.psychologist_service().list_sorted("idade").await?;
    listing_page(&state, "Psicólogos", psychologists).await
}

pub async fn patients_page(
    State(state): State<AppState>,
) -> Result<Html<String>, ClinicServiceError> {
    let patients = state.patient_service().list_sorted("idade").await?;
    listing_page(&state, "Pacientes", patients).await
}

pub async fn approaches_page(
    State(state): State<AppState>,
) -> Result<Html<String>, ClinicServiceError> {
    let approaches = state.approach_service().list_sorted("descricao").await?;
    listing_page(&state, "Abordagens", approaches).await
}

pub async fn appointments_page(
    State(state): State<AppState>,
) -> Result<Html<String>, ClinicServiceError> {
    let appointments = state
        .appointment_service()
        .list_sorted("statusAtendimento")
        .await?;
    listing_page(&state, "Atendimentos", appointments).await
}
