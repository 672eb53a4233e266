use std::fmt;

use clinic_domain::appointment::AppointmentStatus;
use clinic_domain::sort::Sort;
use clinic_domain::user::{MIN_AGE, UserKind};

use crate::error::ClinicServiceError;

// ── Approach ─────────────────────────────────────────────────────────────────

/// Treatment approach (e.g. "CBT").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approach {
    pub id: i32,
    pub description: String,
}

/// Approach to persist. `id` selects an existing record to overwrite.
#[derive(Debug, Clone)]
pub struct ApproachInput {
    pub id: Option<i32>,
    pub description: String,
}

pub const APPROACH_DESCRIPTION_MAX: usize = 50;

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Abordagem{{ID: {}, Descrição: {}}}", self.id, self.description)
    }
}

// ── Address ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i32,
    pub postal_code: String,
    pub street: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Address fields as produced by the lookup or supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressInput {
    pub postal_code: String,
    pub street: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

pub const ADDRESS_STATE_MAX: usize = 2;

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Endereco{{ ID:{}, CEP:{}, Logradouro:{}, Complemento:{}, Bairro:{}, Localidade:{}, UF:{}}}",
            self.id,
            self.postal_code,
            self.street,
            self.complement,
            self.neighborhood,
            self.city,
            self.state
        )
    }
}

// ── Person / User ────────────────────────────────────────────────────────────

/// Fields shared by every user kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub age: i32,
    pub address: Option<Address>,
}

#[derive(Debug, Clone)]
pub struct PersonInput {
    pub id: Option<i32>,
    pub full_name: String,
    pub email: String,
    pub age: i32,
    pub address: Option<AddressInput>,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} Nome: {}, Email: {}, Idade: {}, [",
            self.id, self.full_name, self.email, self.age
        )?;
        if let Some(address) = &self.address {
            write!(f, "{address}")?;
        }
        f.write_str("]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub person: Person,
    /// CPF.
    pub national_id: String,
}

#[derive(Debug, Clone)]
pub struct PatientInput {
    pub person: PersonInput,
    pub national_id: String,
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paciente{{ {}, CPF: {} }}", self.person, self.national_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Psychologist {
    pub person: Person,
    /// CRP.
    pub license_number: String,
    pub approach: Option<Approach>,
}

#[derive(Debug, Clone)]
pub struct PsychologistInput {
    pub person: PersonInput,
    pub license_number: String,
    pub approach_id: Option<i32>,
}

impl fmt::Display for Psychologist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Psicologo{{{}, CRP: {}, [", self.person, self.license_number)?;
        if let Some(approach) = &self.approach {
            write!(f, "{approach}")?;
        }
        f.write_str("] }")
    }
}

/// Any user, resolved to its concrete kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum User {
    Patient(Patient),
    Psychologist(Psychologist),
}

impl User {
    pub fn person(&self) -> &Person {
        match self {
            Self::Patient(p) => &p.person,
            Self::Psychologist(p) => &p.person,
        }
    }

    pub fn id(&self) -> i32 {
        self.person().id
    }

    pub fn kind(&self) -> UserKind {
        match self {
            Self::Patient(_) => UserKind::Patient,
            Self::Psychologist(_) => UserKind::Psychologist,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patient(p) => p.fmt(f),
            Self::Psychologist(p) => p.fmt(f),
        }
    }
}

// ── Appointment ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: i32,
    pub psychologist_id: i32,
    pub patient_id: i32,
    pub kind: String,
    pub date: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone)]
pub struct AppointmentInput {
    pub id: Option<i32>,
    pub psychologist_id: i32,
    pub patient_id: i32,
    pub kind: String,
    pub date: String,
    pub status: AppointmentStatus,
}

pub const APPOINTMENT_KIND_MAX: usize = 100;

impl AppointmentInput {
    /// New appointment, always in progress.
    pub fn new(psychologist_id: i32, patient_id: i32, date: String, kind: String) -> Self {
        Self {
            id: None,
            psychologist_id,
            patient_id,
            kind,
            date,
            status: AppointmentStatus::InProgress,
        }
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Atendimento{{{}, [PsicologoId: {}], [PacienteId: {}], Data: {}, Tipo de Atendimento: {}, Status Atendimento: {}}}",
            self.id, self.psychologist_id, self.patient_id, self.date, self.kind, self.status
        )
    }
}

// ── Sorting ──────────────────────────────────────────────────────────────────

/// A field to order by, and the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: F,
    pub sort: Sort,
}

/// Sortable field set of one entity, addressed by its wire name.
pub trait SortField: Sized + Copy {
    fn from_field(name: &str) -> Option<Self>;

    fn parse(name: &str, sort: Sort) -> Result<OrderBy<Self>, ClinicServiceError> {
        Self::from_field(name.trim())
            .map(|field| OrderBy { field, sort })
            .ok_or_else(|| ClinicServiceError::UnknownSortField(name.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproachSortBy {
    Id,
    Description,
}

impl SortField for ApproachSortBy {
    fn from_field(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "descricao" => Some(Self::Description),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonSortBy {
    Id,
    FullName,
    Email,
    Age,
}

impl SortField for PersonSortBy {
    fn from_field(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "nomeCompleto" => Some(Self::FullName),
            "email" => Some(Self::Email),
            "idade" => Some(Self::Age),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientSortBy {
    Person(PersonSortBy),
    NationalId,
}

impl SortField for PatientSortBy {
    fn from_field(name: &str) -> Option<Self> {
        match name {
            "cpf" => Some(Self::NationalId),
            other => PersonSortBy::from_field(other).map(Self::Person),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsychologistSortBy {
    Person(PersonSortBy),
    LicenseNumber,
}

impl SortField for PsychologistSortBy {
    fn from_field(name: &str) -> Option<Self> {
        match name {
            "crp" => Some(Self::LicenseNumber),
            other => PersonSortBy::from_field(other).map(Self::Person),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentSortBy {
    Id,
    Date,
    Kind,
    Status,
}

impl SortField for AppointmentSortBy {
    fn from_field(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "atendimentoDate" => Some(Self::Date),
            "tipoAtendimento" => Some(Self::Kind),
            "statusAtendimento" => Some(Self::Status),
            _ => None,
        }
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

fn require_text(field: &'static str, value: &str) -> Result<(), ClinicServiceError> {
    if value.trim().is_empty() {
        return Err(ClinicServiceError::BlankField(field));
    }
    Ok(())
}

fn limit_text(field: &'static str, value: &str, max: usize) -> Result<(), ClinicServiceError> {
    if value.chars().count() > max {
        return Err(ClinicServiceError::FieldTooLong { field, max });
    }
    Ok(())
}

pub fn validate_approach(input: &ApproachInput) -> Result<(), ClinicServiceError> {
    require_text("descricao", &input.description)?;
    limit_text("descricao", &input.description, APPROACH_DESCRIPTION_MAX)
}

pub fn validate_address(input: &AddressInput) -> Result<(), ClinicServiceError> {
    limit_text("uf", &input.state, ADDRESS_STATE_MAX)
}

pub fn validate_person(input: &PersonInput) -> Result<(), ClinicServiceError> {
    require_text("nomeCompleto", &input.full_name)?;
    require_text("email", &input.email)?;
    if input.age < MIN_AGE {
        return Err(ClinicServiceError::Underage);
    }
    if let Some(address) = &input.address {
        validate_address(address)?;
    }
    Ok(())
}

pub fn validate_patient(input: &PatientInput) -> Result<(), ClinicServiceError> {
    validate_person(&input.person)?;
    require_text("cpf", &input.national_id)
}

pub fn validate_psychologist(input: &PsychologistInput) -> Result<(), ClinicServiceError> {
    validate_person(&input.person)?;
    require_text("crp", &input.license_number)
}

pub fn validate_appointment(input: &AppointmentInput) -> Result<(), ClinicServiceError> {
    require_text("tipoAtendimento", &input.kind)?;
    limit_text("tipoAtendimento", &input.kind, APPOINTMENT_KIND_MAX)?;
    require_text("atendimentoDate", &input.date)
}
