//! Wire types and confirmation strings shared by the entity handlers.

use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use clinic_domain::appointment::AppointmentStatus;

use crate::domain::types::{
    Address, AddressInput, Appointment, Approach, Patient, Psychologist, User,
};
use crate::error::ClinicServiceError;
use crate::state::AppState;
use crate::usecase::inclusion::Inclusion;

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ListQuery {
    #[serde(rename = "ordenarPor")]
    pub ordenar_por: Option<String>,
}

// ── Messages ─────────────────────────────────────────────────────────────────

pub fn inclusion_message<T: Display>(outcome: &Inclusion<T>) -> String {
    match outcome {
        Inclusion::Included(record) => format!("Inclusão:{record}, efetuada com sucesso"),
        Inclusion::Rejected(reason) => format!("Inclusão não efetuada: {reason}"),
    }
}

pub fn deletion_message(id: i32) -> String {
    format!("Exclusão do id : {id}, efetuada com sucesso.")
}

// ── Bodies ───────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdRef {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApproachBody {
    #[serde(default)]
    pub id: Option<i32>,
    pub descricao: String,
}

impl From<Approach> for ApproachBody {
    fn from(a: Approach) -> Self {
        Self {
            id: Some(a.id),
            descricao: a.description,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressBody {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
}

impl From<Address> for AddressBody {
    fn from(a: Address) -> Self {
        Self {
            id: Some(a.id),
            cep: a.postal_code,
            logradouro: a.street,
            complemento: a.complement,
            bairro: a.neighborhood,
            localidade: a.city,
            uf: a.state,
        }
    }
}

impl From<AddressBody> for AddressInput {
    fn from(b: AddressBody) -> Self {
        Self {
            postal_code: b.cep,
            street: b.logradouro,
            complement: b.complemento,
            neighborhood: b.bairro,
            city: b.localidade,
            state: b.uf,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: i32,
    pub psicologo: IdRef,
    pub paciente: IdRef,
    pub tipo_atendimento: String,
    pub atendimento_date: String,
    pub status_atendimento: AppointmentStatus,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            psicologo: IdRef {
                id: a.psychologist_id,
            },
            paciente: IdRef { id: a.patient_id },
            tipo_atendimento: a.kind,
            atendimento_date: a.date,
            status_atendimento: a.status,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub id: i32,
    pub nome_completo: String,
    pub email: String,
    pub idade: i32,
    pub endereco: Option<AddressBody>,
    pub cpf: String,
    pub atendimento: Vec<AppointmentResponse>,
}

impl PatientResponse {
    pub fn new(p: Patient, appointments: Vec<Appointment>) -> Self {
        Self {
            id: p.person.id,
            nome_completo: p.person.full_name,
            email: p.person.email,
            idade: p.person.age,
            endereco: p.person.address.map(AddressBody::from),
            cpf: p.national_id,
            atendimento: appointments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PsychologistResponse {
    pub id: i32,
    pub nome_completo: String,
    pub email: String,
    pub idade: i32,
    pub endereco: Option<AddressBody>,
    pub crp: String,
    pub abordagem: Option<ApproachBody>,
    pub atendimentos: Vec<AppointmentResponse>,
}

impl PsychologistResponse {
    pub fn new(p: Psychologist, appointments: Vec<Appointment>) -> Self {
        Self {
            id: p.person.id,
            nome_completo: p.person.full_name,
            email: p.person.email,
            idade: p.person.age,
            endereco: p.person.address.map(AddressBody::from),
            crp: p.license_number,
            abordagem: p.approach.map(ApproachBody::from),
            atendimentos: appointments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Any user, tagged with its kind.
#[derive(Serialize, Debug)]
#[serde(tag = "tipo")]
pub enum UserResponse {
    #[serde(rename = "paciente")]
    Patient(PatientResponse),
    #[serde(rename = "psicologo")]
    Psychologist(PsychologistResponse),
}

// ── Appointment embedding ────────────────────────────────────────────────────

/// Every appointment, grouped by participant, for embedding in list responses.
pub struct AppointmentIndex {
    by_psychologist: HashMap<i32, Vec<Appointment>>,
    by_patient: HashMap<i32, Vec<Appointment>>,
}

impl AppointmentIndex {
    pub async fn load(state: &AppState) -> Result<Self, ClinicServiceError> {
        let all = state.appointment_service().list().await?;
        let mut index = Self {
            by_psychologist: HashMap::new(),
            by_patient: HashMap::new(),
        };
        for appointment in all {
            index
                .by_psychologist
                .entry(appointment.psychologist_id)
                .or_default()
                .push(appointment.clone());
            index
                .by_patient
                .entry(appointment.patient_id)
                .or_default()
                .push(appointment);
        }
        Ok(index)
    }

    pub fn patient(&mut self, p: Patient) -> PatientResponse {
        let appointments = self.by_patient.remove(&p.person.id).unwrap_or_default();
        PatientResponse::new(p, appointments)
    }

    pub fn psychologist(&mut self, p: Psychologist) -> PsychologistResponse {
        let appointments = self
            .by_psychologist
            .remove(&p.person.id)
            .unwrap_or_default();
        PsychologistResponse::new(p, appointments)
    }

    pub fn user(&mut self, user: User) -> UserResponse {
        match user {
            User::Patient(p) => UserResponse::Patient(self.patient(p)),
            User::Psychologist(p) => UserResponse::Psychologist(self.psychologist(p)),
        }
    }
}

pub async fn patient_response(
    state: &AppState,
    p: Patient,
) -> Result<PatientResponse, ClinicServiceError> {
    let appointments = state
        .appointment_service()
        .list_by_patient(p.person.id)
        .await?;
    Ok(PatientResponse::new(p, appointments))
}

pub async fn psychologist_response(
    state: &AppState,
    p: Psychologist,
) -> Result<PsychologistResponse, ClinicServiceError> {
    let appointments = state
        .appointment_service()
        .list_by_psychologist(p.person.id)
        .await?;
    Ok(PsychologistResponse::new(p, appointments))
}

// ── Address resolution ───────────────────────────────────────────────────────

/// Address for a create body: an explicit `endereco` wins, otherwise a bare
/// `cep` is looked up. An unknown postal code leaves the user without address.
pub async fn resolve_address(
    state: &AppState,
    endereco: Option<AddressBody>,
    cep: Option<String>,
) -> Result<Option<AddressInput>, ClinicServiceError> {
    if let Some(body) = endereco {
        return Ok(Some(body.into()));
    }
    let Some(cep) = cep.filter(|c| !c.trim().is_empty()) else {
        return Ok(None);
    };
    let address = state.address_service().find(&cep).await?;
    if address.is_none() {
        tracing::warn!(%cep, "unknown postal code, saving without address");
    }
    Ok(address)
}
