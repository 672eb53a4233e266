use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAppointmentRepository, DbApproachRepository, DbPatientRepository,
    DbPsychologistRepository, DbUserRepository,
};
use crate::infra::viacep::ViaCepClient;
use crate::usecase::address::AddressService;
use crate::usecase::appointment::AppointmentService;
use crate::usecase::approach::ApproachService;
use crate::usecase::patient::PatientService;
use crate::usecase::psychologist::PsychologistService;
use crate::usecase::user::UserService;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub address_client: ViaCepClient,
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl AppState {
    pub fn approach_repo(&self) -> DbApproachRepository {
        DbApproachRepository {
            db: self.db.clone(),
        }
    }

    pub fn patient_repo(&self) -> DbPatientRepository {
        DbPatientRepository {
            db: self.db.clone(),
        }
    }

    pub fn psychologist_repo(&self) -> DbPsychologistRepository {
        DbPsychologistRepository {
            db: self.db.clone(),
        }
    }

    pub fn appointment_repo(&self) -> DbAppointmentRepository {
        DbAppointmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn approach_service(&self) -> ApproachService<DbApproachRepository> {
        ApproachService {
            repo: self.approach_repo(),
        }
    }

    pub fn patient_service(&self) -> PatientService<DbPatientRepository> {
        PatientService {
            repo: self.patient_repo(),
        }
    }

    pub fn psychologist_service(&self) -> PsychologistService<DbPsychologistRepository> {
        PsychologistService {
            repo: self.psychologist_repo(),
        }
    }

    pub fn appointment_service(&self) -> AppointmentService<DbAppointmentRepository> {
        AppointmentService {
            repo: self.appointment_repo(),
        }
    }

    pub fn user_service(&self) -> UserService<DbUserRepository> {
        UserService {
            repo: self.user_repo(),
        }
    }

    pub fn address_service(&self) -> AddressService<ViaCepClient> {
        AddressService {
            client: self.address_client.clone(),
        }
    }
}
