use std::path::PathBuf;

use tracing::{info, warn};

use crate::domain::types::{
    AppointmentInput, ApproachInput, PatientInput, PersonInput, PsychologistInput,
};
use crate::seed::{Record, SeedError, SeedFile};
use crate::state::AppState;

/// `descricao`
pub(super) async fn approaches(state: &AppState, path: PathBuf) -> Result<(), SeedError> {
    let file = SeedFile::read(path, 1).await?;
    let service = state.approach_service();
    for record in file.records() {
        service
            .include(ApproachInput {
                id: None,
                description: record.text(0),
            })
            .await;
    }
    for approach in service.list().await? {
        info!(step = "approaches", record = %approach, "loaded");
    }
    Ok(())
}

/// `nome;email;idade;crp;idAbordagem;cep`
pub(super) async fn psychologists(state: &AppState, path: PathBuf) -> Result<(), SeedError> {
    let file = SeedFile::read(path, 6).await?;
    let approaches = state.approach_service();
    let service = state.psychologist_service();
    for record in file.records() {
        let approach_id = match record.opt_int(4)? {
            Some(id) => {
                let found = approaches.get(id).await?.map(|a| a.id);
                if found.is_none() {
                    warn!(approach_id = id, "approach not found, loading without approach");
                }
                found
            }
            None => None,
        };
        let person = person(state, &record, 5).await?;
        service
            .include(PsychologistInput {
                person,
                license_number: record.text(3),
                approach_id,
            })
            .await;
    }
    for psychologist in service.list().await? {
        info!(step = "psychologists", record = %psychologist, "loaded");
    }
    if let Some(crp) = file.records().next().map(|r| r.text(3)) {
        match service.find_by_license_number(&crp).await? {
            Some(found) => info!(step = "psychologists", %crp, record = %found, "found by crp"),
            None => warn!(step = "psychologists", %crp, "no psychologist with crp"),
        }
    }
    Ok(())
}

/// `nome;email;idade;cpf;cep`
pub(super) async fn patients(state: &AppState, path: PathBuf) -> Result<(), SeedError> {
    let file = SeedFile::read(path, 5).await?;
    let service = state.patient_service();
    for record in file.records() {
        let person = person(state, &record, 4).await?;
        service
            .include(PatientInput {
                person,
                national_id: record.text(3),
            })
            .await;
    }
    for patient in service.list().await? {
        info!(step = "patients", record = %patient, "loaded");
    }
    if let Some(cpf) = file.records().next().map(|r| r.text(3)) {
        match service.find_by_national_id(&cpf).await? {
            Some(found) => info!(step = "patients", %cpf, record = %found, "found by cpf"),
            None => warn!(step = "patients", %cpf, "no patient with cpf"),
        }
    }
    Ok(())
}

/// `idPsicologo;idPaciente;data;tipo;status`
pub(super) async fn appointments(state: &AppState, path: PathBuf) -> Result<(), SeedError> {
    let file = SeedFile::read(path, 5).await?;
    let service = state.appointment_service();
    for record in file.records() {
        let input = AppointmentInput::new(
            record.int(0)?,
            record.int(1)?,
            record.text(2),
            record.text(3),
        )
        .with_status(record.flag(4)?.into());
        service.include(input).await;
    }
    for completed in [true, false] {
        for appointment in service.list_by_status(completed).await? {
            info!(step = "appointments", completed, record = %appointment, "loaded");
        }
    }
    Ok(())
}

/// Read-only: reports the users aged 30.
pub(super) async fn users(state: &AppState) -> Result<(), SeedError> {
    let service = state.user_service();
    info!(step = "users", total = service.count().await?, "users loaded");
    for user in service.find_by_age(30).await? {
        info!(step = "users", age = 30, record = %user, "found");
    }
    Ok(())
}

/// Common `nome;email;idade` prefix plus the address looked up from field `cep_idx`.
async fn person(
    state: &AppState,
    record: &Record<'_>,
    cep_idx: usize,
) -> Result<PersonInput, SeedError> {
    let cep = record.text(cep_idx);
    let address = state.address_service().find(&cep).await?;
    if address.is_none() {
        warn!(%cep, "unknown postal code, loading without address");
    }
    Ok(PersonInput {
        id: None,
        full_name: record.text(0),
        email: record.text(1),
        age: record.int(2)?,
        address,
    })
}
