//! One-shot startup loaders.
//!
//! Each step reads a `;`-delimited file from the seed directory and inserts
//! its records through the entity services. Steps run sequentially in
//! [`SEED_ORDER`]; later steps resolve ids written by earlier ones.

mod file;
mod steps;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ClinicServiceError;
use crate::state::AppState;

pub use file::{Record, SeedFile};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{}: {}", .path.display(), .line, .reason)]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error(transparent)]
    Service(#[from] ClinicServiceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    Approaches,
    Psychologists,
    Patients,
    Appointments,
    Users,
}

/// Startup order. Psychologists reference approaches; appointments reference both users.
pub const SEED_ORDER: [SeedStep; 5] = [
    SeedStep::Approaches,
    SeedStep::Psychologists,
    SeedStep::Patients,
    SeedStep::Appointments,
    SeedStep::Users,
];

impl SeedStep {
    pub fn name(self) -> &'static str {
        match self {
            Self::Approaches => "approaches",
            Self::Psychologists => "psychologists",
            Self::Patients => "patients",
            Self::Appointments => "appointments",
            Self::Users => "users",
        }
    }

    /// Whether the step's table already holds rows from an earlier start.
    pub async fn already_loaded(self, state: &AppState) -> Result<bool, SeedError> {
        let rows = match self {
            Self::Approaches => state.approach_service().count().await?,
            Self::Psychologists => state.psychologist_service().count().await?,
            Self::Patients => state.patient_service().count().await?,
            Self::Appointments => state.appointment_service().count().await?,
            Self::Users => return Ok(false),
        };
        Ok(rows > 0)
    }

    /// Run the step unless its table is already populated.
    pub async fn run(self, state: &AppState, dir: &Path) -> Result<(), SeedError> {
        if self.already_loaded(state).await? {
            info!(step = self.name(), "table not empty, skipping");
            return Ok(());
        }
        let path = |name: &str| dir.join(name);
        match self {
            Self::Approaches => steps::approaches(state, path("abordagem.txt")).await,
            Self::Psychologists => steps::psychologists(state, path("psicologo.txt")).await,
            Self::Patients => steps::patients(state, path("paciente.txt")).await,
            Self::Appointments => steps::appointments(state, path("atendimento.txt")).await,
            Self::Users => steps::users(state).await,
        }
    }
}

/// Run every step in [`SEED_ORDER`], stopping at the first failure.
pub async fn run_all(state: &AppState, dir: &Path) -> Result<(), SeedError> {
    for step in SEED_ORDER {
        info!(step = step.name(), dir = %dir.display(), "seeding");
        step.run(state, dir).await?;
    }
    Ok(())
}
