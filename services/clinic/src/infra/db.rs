use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
    TransactionTrait,
    sea_query::{ColumnRef, IntoColumnRef},
};

use clinic_core::sea_ext::OrderBySort;
use clinic_domain::appointment::AppointmentStatus;
use clinic_domain::user::UserKind;
use clinic_schema::{addresses, appointments, approaches, patients, psychologists, users};

use crate::domain::repository::{
    AppointmentRepository, ApproachRepository, PatientRepository, PsychologistRepository,
    UserRepository,
};
use crate::domain::types::{
    Address, AddressInput, Appointment, AppointmentInput, AppointmentSortBy, Approach,
    ApproachInput, ApproachSortBy, OrderBy, Patient, PatientInput, PatientSortBy, Person,
    PersonInput, PersonSortBy, Psychologist, PsychologistInput, PsychologistSortBy, User,
};
use crate::error::ClinicServiceError;

// ── Approach repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbApproachRepository {
    pub db: DatabaseConnection,
}

impl ApproachRepository for DbApproachRepository {
    async fn save(&self, input: &ApproachInput) -> Result<Approach, ClinicServiceError> {
        let existing = match input.id {
            Some(id) => approaches::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .context("find approach for save")?,
            None => None,
        };
        let mut am = approaches::ActiveModel {
            description: Set(input.description.clone()),
            ..Default::default()
        };
        let model = match existing {
            Some(row) => {
                am.id = Set(row.id);
                am.update(&self.db).await
            }
            None => am.insert(&self.db).await,
        }
        .context("write approach")?;
        Ok(approach_from_model(model))
    }

    async fn list(
        &self,
        order: Option<OrderBy<ApproachSortBy>>,
    ) -> Result<Vec<Approach>, ClinicServiceError> {
        let mut select = approaches::Entity::find();
        if let Some(OrderBy { field, sort }) = order {
            let col = match field {
                ApproachSortBy::Id => approaches::Column::Id,
                ApproachSortBy::Description => approaches::Column::Description,
            };
            select = select.order_by_sort(col, sort);
        }
        let models = select
            .order_by_asc(approaches::Column::Id)
            .all(&self.db)
            .await
            .context("list approaches")?;
        Ok(models.into_iter().map(approach_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Approach>, ClinicServiceError> {
        let model = approaches::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find approach by id")?;
        Ok(model.map(approach_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        let txn = self.db.begin().await.context("begin approach delete")?;

        // SQLite reports RESTRICT as a trigger failure, not as a FK violation.
        let in_use = psychologists::Entity::find()
            .filter(psychologists::Column::ApproachId.eq(id))
            .count(&txn)
            .await
            .context("check approach references")?;
        if in_use > 0 {
            return Err(ClinicServiceError::ApproachInUse);
        }

        let res = match approaches::Entity::delete_by_id(id).exec(&txn).await {
            Ok(res) => res,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                return Err(ClinicServiceError::ApproachInUse);
            }
            Err(e) => return Err(anyhow::Error::new(e).context("delete approach").into()),
        };
        txn.commit().await.context("commit approach delete")?;
        Ok(res.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, ClinicServiceError> {
        let n = approaches::Entity::find()
            .count(&self.db)
            .await
            .context("count approaches")?;
        Ok(n)
    }
}

fn approach_from_model(model: approaches::Model) -> Approach {
    Approach {
        id: model.id,
        description: model.description,
    }
}

// ── Patient repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPatientRepository {
    pub db: DatabaseConnection,
}

impl PatientRepository for DbPatientRepository {
    async fn save(&self, input: &PatientInput) -> Result<Patient, ClinicServiceError> {
        let txn = self.db.begin().await.context("begin patient save")?;

        let holder = patients::Entity::find()
            .filter(patients::Column::NationalId.eq(input.national_id.as_str()))
            .one(&txn)
            .await
            .context("check patient cpf")?;
        if let Some(holder) = holder {
            if Some(holder.user_id) != input.person.id {
                return Err(ClinicServiceError::NationalIdTaken);
            }
        }

        let user_id = write_person(&txn, &input.person, UserKind::Patient).await?;
        let exists = patients::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .context("find patient row")?
            .is_some();
        let am = patients::ActiveModel {
            user_id: Set(user_id),
            national_id: Set(input.national_id.clone()),
        };
        let written = if exists {
            am.update(&txn).await
        } else {
            am.insert(&txn).await
        };
        written
            .map_err(|e| unique_violation(e, ClinicServiceError::NationalIdTaken, "write patient"))?;

        txn.commit().await.context("commit patient save")?;

        let saved = self.find_by_id(user_id).await?;
        Ok(saved.with_context(|| format!("patient {user_id} missing after save"))?)
    }

    async fn list(
        &self,
        order: Option<OrderBy<PatientSortBy>>,
    ) -> Result<Vec<Patient>, ClinicServiceError> {
        let mut select = users::Entity::find().inner_join(patients::Entity);
        if let Some(OrderBy { field, sort }) = order {
            select = select.order_by_sort(patient_column(field), sort);
        }
        let rows = select
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list patients")?;
        Ok(load_patients(&self.db, rows).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Patient>, ClinicServiceError> {
        let row = users::Entity::find_by_id(id)
            .filter(users::Column::Kind.eq(UserKind::Patient.as_str()))
            .one(&self.db)
            .await
            .context("find patient by id")?;
        let found = load_patients(&self.db, row.into_iter().collect()).await?;
        Ok(found.into_iter().next())
    }

    async fn find_by_national_id(
        &self,
        cpf: &str,
    ) -> Result<Option<Patient>, ClinicServiceError> {
        let row = users::Entity::find()
            .inner_join(patients::Entity)
            .filter(patients::Column::NationalId.eq(cpf))
            .one(&self.db)
            .await
            .context("find patient by cpf")?;
        let found = load_patients(&self.db, row.into_iter().collect()).await?;
        Ok(found.into_iter().next())
    }

    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        delete_user_of_kind(&self.db, id, Some(UserKind::Patient)).await
    }

    async fn count(&self) -> Result<u64, ClinicServiceError> {
        let n = patients::Entity::find()
            .count(&self.db)
            .await
            .context("count patients")?;
        Ok(n)
    }
}

fn patient_column(field: PatientSortBy) -> ColumnRef {
    match field {
        PatientSortBy::Person(field) => person_column(field),
        PatientSortBy::NationalId => {
            (patients::Entity, patients::Column::NationalId).into_column_ref()
        }
    }
}

async fn load_patients<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<users::Model>,
) -> anyhow::Result<Vec<Patient>> {
    let users = load_users(conn, rows).await?;
    Ok(users
        .into_iter()
        .filter_map(|user| match user {
            User::Patient(p) => Some(p),
            User::Psychologist(_) => None,
        })
        .collect())
}

// ── Psychologist repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPsychologistRepository {
    pub db: DatabaseConnection,
}

impl PsychologistRepository for DbPsychologistRepository {
    async fn save(&self, input: &PsychologistInput) -> Result<Psychologist, ClinicServiceError> {
        let txn = self.db.begin().await.context("begin psychologist save")?;

        let holder = psychologists::Entity::find()
            .filter(psychologists::Column::LicenseNumber.eq(input.license_number.as_str()))
            .one(&txn)
            .await
            .context("check psychologist crp")?;
        if let Some(holder) = holder {
            if Some(holder.user_id) != input.person.id {
                return Err(ClinicServiceError::LicenseNumberTaken);
            }
        }
        if let Some(approach_id) = input.approach_id {
            let approach = approaches::Entity::find_by_id(approach_id)
                .one(&txn)
                .await
                .context("check psychologist approach")?;
            if approach.is_none() {
                return Err(ClinicServiceError::ApproachNotFound);
            }
        }

        let user_id = write_person(&txn, &input.person, UserKind::Psychologist).await?;
        let exists = psychologists::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .context("find psychologist row")?
            .is_some();
        let am = psychologists::ActiveModel {
            user_id: Set(user_id),
            license_number: Set(input.license_number.clone()),
            approach_id: Set(input.approach_id),
        };
        let written = if exists {
            am.update(&txn).await
        } else {
            am.insert(&txn).await
        };
        written.map_err(|e| {
            unique_violation(e, ClinicServiceError::LicenseNumberTaken, "write psychologist")
        })?;

        txn.commit().await.context("commit psychologist save")?;

        let saved = self.find_by_id(user_id).await?;
        Ok(saved.with_context(|| format!("psychologist {user_id} missing after save"))?)
    }

    async fn list(
        &self,
        order: Option<OrderBy<PsychologistSortBy>>,
    ) -> Result<Vec<Psychologist>, ClinicServiceError> {
        let mut select = users::Entity::find().inner_join(psychologists::Entity);
        if let Some(OrderBy { field, sort }) = order {
            select = select.order_by_sort(psychologist_column(field), sort);
        }
        let rows = select
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list psychologists")?;
        Ok(load_psychologists(&self.db, rows).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Psychologist>, ClinicServiceError> {
        let row = users::Entity::find_by_id(id)
            .filter(users::Column::Kind.eq(UserKind::Psychologist.as_str()))
            .one(&self.db)
            .await
            .context("find psychologist by id")?;
        let found = load_psychologists(&self.db, row.into_iter().collect()).await?;
        Ok(found.into_iter().next())
    }

    async fn find_by_license_number(
        &self,
        crp: &str,
    ) -> Result<Option<Psychologist>, ClinicServiceError> {
        let row = users::Entity::find()
            .inner_join(psychologists::Entity)
            .filter(psychologists::Column::LicenseNumber.eq(crp))
            .one(&self.db)
            .await
            .context("find psychologist by crp")?;
        let found = load_psychologists(&self.db, row.into_iter().collect()).await?;
        Ok(found.into_iter().next())
    }

    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        delete_user_of_kind(&self.db, id, Some(UserKind::Psychologist)).await
    }

    async fn count(&self) -> Result<u64, ClinicServiceError> {
        let n = psychologists::Entity::find()
            .count(&self.db)
            .await
            .context("count psychologists")?;
        Ok(n)
    }
}

fn psychologist_column(field: PsychologistSortBy) -> ColumnRef {
    match field {
        PsychologistSortBy::Person(field) => person_column(field),
        PsychologistSortBy::LicenseNumber => {
            (psychologists::Entity, psychologists::Column::LicenseNumber).into_column_ref()
        }
    }
}

async fn load_psychologists<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<users::Model>,
) -> anyhow::Result<Vec<Psychologist>> {
    let users = load_users(conn, rows).await?;
    Ok(users
        .into_iter()
        .filter_map(|user| match user {
            User::Psychologist(p) => Some(p),
            User::Patient(_) => None,
        })
        .collect())
}

// ── Appointment repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAppointmentRepository {
    pub db: DatabaseConnection,
}

impl AppointmentRepository for DbAppointmentRepository {
    async fn save(&self, input: &AppointmentInput) -> Result<Appointment, ClinicServiceError> {
        let txn = self.db.begin().await.context("begin appointment save")?;

        let psychologist = psychologists::Entity::find_by_id(input.psychologist_id)
            .one(&txn)
            .await
            .context("check appointment psychologist")?;
        if psychologist.is_none() {
            return Err(ClinicServiceError::PsychologistNotFound);
        }
        let patient = patients::Entity::find_by_id(input.patient_id)
            .one(&txn)
            .await
            .context("check appointment patient")?;
        if patient.is_none() {
            return Err(ClinicServiceError::PatientNotFound);
        }

        let existing = match input.id {
            Some(id) => appointments::Entity::find_by_id(id)
                .one(&txn)
                .await
                .context("find appointment for save")?,
            None => None,
        };
        let mut am = appointments::ActiveModel {
            psychologist_id: Set(input.psychologist_id),
            patient_id: Set(input.patient_id),
            kind: Set(input.kind.clone()),
            date: Set(input.date.clone()),
            status: Set(input.status.is_completed()),
            ..Default::default()
        };
        let model = match existing {
            Some(row) => {
                am.id = Set(row.id);
                am.update(&txn).await
            }
            None => am.insert(&txn).await,
        }
        .context("write appointment")?;

        txn.commit().await.context("commit appointment save")?;
        Ok(appointment_from_model(model))
    }

    async fn list(
        &self,
        order: Option<OrderBy<AppointmentSortBy>>,
    ) -> Result<Vec<Appointment>, ClinicServiceError> {
        let mut select = appointments::Entity::find();
        if let Some(OrderBy { field, sort }) = order {
            let col = match field {
                AppointmentSortBy::Id => appointments::Column::Id,
                AppointmentSortBy::Date => appointments::Column::Date,
                AppointmentSortBy::Kind => appointments::Column::Kind,
                AppointmentSortBy::Status => appointments::Column::Status,
            };
            select = select.order_by_sort(col, sort);
        }
        let models = select
            .order_by_asc(appointments::Column::Id)
            .all(&self.db)
            .await
            .context("list appointments")?;
        Ok(models.into_iter().map(appointment_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, ClinicServiceError> {
        let model = appointments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find appointment by id")?;
        Ok(model.map(appointment_from_model))
    }

    async fn list_by_status(
        &self,
        completed: bool,
    ) -> Result<Vec<Appointment>, ClinicServiceError> {
        self.list_where(
            appointments::Column::Status.eq(completed),
            "list appointments by status",
        )
        .await
    }

    async fn list_by_psychologist(
        &self,
        psychologist_id: i32,
    ) -> Result<Vec<Appointment>, ClinicServiceError> {
        self.list_where(
            appointments::Column::PsychologistId.eq(psychologist_id),
            "list appointments by psychologist",
        )
        .await
    }

    async fn list_by_patient(
        &self,
        patient_id: i32,
    ) -> Result<Vec<Appointment>, ClinicServiceError> {
        self.list_where(
            appointments::Column::PatientId.eq(patient_id),
            "list appointments by patient",
        )
        .await
    }

    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        let res = appointments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete appointment")?;
        Ok(res.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, ClinicServiceError> {
        let n = appointments::Entity::find()
            .count(&self.db)
            .await
            .context("count appointments")?;
        Ok(n)
    }
}

impl DbAppointmentRepository {
    async fn list_where(
        &self,
        filter: sea_orm::sea_query::SimpleExpr,
        what: &'static str,
    ) -> Result<Vec<Appointment>, ClinicServiceError> {
        let models = appointments::Entity::find()
            .filter(filter)
            .order_by_asc(appointments::Column::Id)
            .all(&self.db)
            .await
            .context(what)?;
        Ok(models.into_iter().map(appointment_from_model).collect())
    }
}

fn appointment_from_model(model: appointments::Model) -> Appointment {
    Appointment {
        id: model.id,
        psychologist_id: model.psychologist_id,
        patient_id: model.patient_id,
        kind: model.kind,
        date: model.date,
        status: AppointmentStatus::from(model.status),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(
        &self,
        order: Option<OrderBy<PersonSortBy>>,
    ) -> Result<Vec<User>, ClinicServiceError> {
        let mut select = users::Entity::find();
        if let Some(OrderBy { field, sort }) = order {
            select = select.order_by_sort(person_column(field), sort);
        }
        let rows = select
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(load_users(&self.db, rows).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ClinicServiceError> {
        let row = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        let found = load_users(&self.db, row.into_iter().collect()).await?;
        Ok(found.into_iter().next())
    }

    async fn find_by_age(&self, age: i32) -> Result<Vec<User>, ClinicServiceError> {
        let rows = users::Entity::find()
            .filter(users::Column::Age.eq(age))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("find users by age")?;
        Ok(load_users(&self.db, rows).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ClinicServiceError> {
        delete_user_of_kind(&self.db, id, None).await
    }

    async fn count(&self) -> Result<u64, ClinicServiceError> {
        let n = users::Entity::find()
            .count(&self.db)
            .await
            .context("count users")?;
        Ok(n)
    }
}

// ── Shared user helpers ──────────────────────────────────────────────────────

fn person_column(field: PersonSortBy) -> ColumnRef {
    let col = match field {
        PersonSortBy::Id => users::Column::Id,
        PersonSortBy::FullName => users::Column::FullName,
        PersonSortBy::Email => users::Column::Email,
        PersonSortBy::Age => users::Column::Age,
    };
    (users::Entity, col).into_column_ref()
}

/// Resolve user rows into their concrete kinds, batch-loading subtype rows,
/// addresses and approaches. Row order is preserved.
async fn load_users<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<users::Model>,
) -> anyhow::Result<Vec<User>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i32> = rows.iter().map(|u| u.id).collect();
    let address_ids: Vec<i32> = rows.iter().filter_map(|u| u.address_id).collect();

    let mut patient_rows: HashMap<i32, patients::Model> = patients::Entity::find()
        .filter(patients::Column::UserId.is_in(ids.clone()))
        .all(conn)
        .await
        .context("load patient rows")?
        .into_iter()
        .map(|p| (p.user_id, p))
        .collect();
    let mut psychologist_rows: HashMap<i32, psychologists::Model> = psychologists::Entity::find()
        .filter(psychologists::Column::UserId.is_in(ids))
        .all(conn)
        .await
        .context("load psychologist rows")?
        .into_iter()
        .map(|p| (p.user_id, p))
        .collect();

    let approach_ids: Vec<i32> = psychologist_rows
        .values()
        .filter_map(|p| p.approach_id)
        .collect();
    let approaches: HashMap<i32, Approach> = if approach_ids.is_empty() {
        HashMap::new()
    } else {
        approaches::Entity::find()
            .filter(approaches::Column::Id.is_in(approach_ids))
            .all(conn)
            .await
            .context("load approaches")?
            .into_iter()
            .map(|a| (a.id, approach_from_model(a)))
            .collect()
    };
    let mut addresses: HashMap<i32, Address> = if address_ids.is_empty() {
        HashMap::new()
    } else {
        addresses::Entity::find()
            .filter(addresses::Column::Id.is_in(address_ids))
            .all(conn)
            .await
            .context("load addresses")?
            .into_iter()
            .map(|a| (a.id, address_from_model(a)))
            .collect()
    };

    rows.into_iter()
        .map(|row| {
            let kind = UserKind::from_db(&row.kind)
                .with_context(|| format!("user {} has unknown kind {:?}", row.id, row.kind))?;
            let person = Person {
                id: row.id,
                full_name: row.full_name,
                email: row.email,
                age: row.age,
                address: row.address_id.and_then(|id| addresses.remove(&id)),
            };
            match kind {
                UserKind::Patient => {
                    let sub = patient_rows
                        .remove(&person.id)
                        .with_context(|| format!("patient row missing for user {}", person.id))?;
                    Ok(User::Patient(Patient {
                        person,
                        national_id: sub.national_id,
                    }))
                }
                UserKind::Psychologist => {
                    let sub = psychologist_rows.remove(&person.id).with_context(|| {
                        format!("psychologist row missing for user {}", person.id)
                    })?;
                    Ok(User::Psychologist(Psychologist {
                        person,
                        license_number: sub.license_number,
                        approach: sub.approach_id.and_then(|id| approaches.get(&id).cloned()),
                    }))
                }
            }
        })
        .collect()
}

fn address_from_model(model: addresses::Model) -> Address {
    Address {
        id: model.id,
        postal_code: model.postal_code,
        street: model.street,
        complement: model.complement,
        neighborhood: model.neighborhood,
        city: model.city,
        state: model.state,
    }
}

fn address_active_model(input: &AddressInput) -> addresses::ActiveModel {
    addresses::ActiveModel {
        postal_code: Set(input.postal_code.clone()),
        street: Set(input.street.clone()),
        complement: Set(input.complement.clone()),
        neighborhood: Set(input.neighborhood.clone()),
        city: Set(input.city.clone()),
        state: Set(input.state.clone()),
        ..Default::default()
    }
}

/// Insert or overwrite the `users` row (and its address) for `input`.
///
/// An `input.id` that does not name a user of the same kind is ignored and a
/// new row is inserted. Returns the user id.
async fn write_person<C: ConnectionTrait>(
    conn: &C,
    input: &PersonInput,
    kind: UserKind,
) -> Result<i32, ClinicServiceError> {
    let existing = match input.id {
        Some(id) => users::Entity::find_by_id(id)
            .filter(users::Column::Kind.eq(kind.as_str()))
            .one(conn)
            .await
            .context("find user for save")?,
        None => None,
    };
    let current_address = existing.as_ref().and_then(|row| row.address_id);

    let address_id = match (current_address, &input.address) {
        (Some(id), Some(address)) => {
            let mut am = address_active_model(address);
            am.id = Set(id);
            am.update(conn).await.context("update address")?;
            Some(id)
        }
        (None, Some(address)) => {
            let model = address_active_model(address)
                .insert(conn)
                .await
                .context("insert address")?;
            Some(model.id)
        }
        (_, None) => None,
    };

    let mut am = users::ActiveModel {
        full_name: Set(input.full_name.clone()),
        email: Set(input.email.clone()),
        age: Set(input.age),
        address_id: Set(address_id),
        kind: Set(kind.as_str().to_owned()),
        ..Default::default()
    };
    let user_id = match existing {
        Some(row) => {
            am.id = Set(row.id);
            am.update(conn).await.context("update user")?;
            row.id
        }
        None => am.insert(conn).await.context("insert user")?.id,
    };

    if let (Some(old), None) = (current_address, address_id) {
        addresses::Entity::delete_by_id(old)
            .exec(conn)
            .await
            .context("delete detached address")?;
    }
    Ok(user_id)
}

/// Delete a user with its subtype row, appointments and address in one
/// transaction. `kind` restricts the match; `None` accepts any kind.
async fn delete_user_of_kind(
    db: &DatabaseConnection,
    id: i32,
    kind: Option<UserKind>,
) -> Result<bool, ClinicServiceError> {
    let txn = db.begin().await.context("begin user delete")?;

    let mut select = users::Entity::find_by_id(id);
    if let Some(kind) = kind {
        select = select.filter(users::Column::Kind.eq(kind.as_str()));
    }
    let Some(row) = select.one(&txn).await.context("find user for delete")? else {
        return Ok(false);
    };

    appointments::Entity::delete_many()
        .filter(
            Condition::any()
                .add(appointments::Column::PsychologistId.eq(row.id))
                .add(appointments::Column::PatientId.eq(row.id)),
        )
        .exec(&txn)
        .await
        .context("delete user appointments")?;
    patients::Entity::delete_by_id(row.id)
        .exec(&txn)
        .await
        .context("delete patient row")?;
    psychologists::Entity::delete_by_id(row.id)
        .exec(&txn)
        .await
        .context("delete psychologist row")?;
    users::Entity::delete_by_id(row.id)
        .exec(&txn)
        .await
        .context("delete user")?;
    if let Some(address_id) = row.address_id {
        addresses::Entity::delete_by_id(address_id)
            .exec(&txn)
            .await
            .context("delete user address")?;
    }

    txn.commit().await.context("commit user delete")?;
    Ok(true)
}

fn unique_violation(
    err: DbErr,
    taken: ClinicServiceError,
    what: &'static str,
) -> ClinicServiceError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        taken
    } else {
        anyhow::Error::new(err).context(what).into()
    }
}
