use clinic::domain::repository::{
    AppointmentRepository, ApproachRepository, PatientRepository, PsychologistRepository,
    UserRepository,
};
use clinic::domain::types::{
    AppointmentSortBy, ApproachInput, ApproachSortBy, OrderBy, PatientSortBy, PersonSortBy,
    User,
};
use clinic::error::ClinicServiceError;
use clinic::infra::db::{
    DbAppointmentRepository, DbApproachRepository, DbPatientRepository,
    DbPsychologistRepository, DbUserRepository,
};
use clinic_domain::appointment::AppointmentStatus;
use clinic_domain::sort::Sort;
use clinic_testing::db::memory_db;

use crate::helpers::{appointment, approach, patient, psychologist, sample_address};

#[tokio::test]
async fn should_persist_patient_with_address() {
    let db = memory_db().await;
    let repo = DbPatientRepository { db };

    let saved = repo.save(&patient("Ana Lima", 30, "111")).await.unwrap();
    let found = repo.find_by_id(saved.person.id).await.unwrap().unwrap();

    assert_eq!(found, saved);
    assert_eq!(found.national_id, "111");
    let address = found.person.address.expect("address should be stored");
    assert_eq!(address.city, sample_address().city);
    assert_eq!(address.state, "SP");
}

#[tokio::test]
async fn should_reject_duplicate_national_id_and_keep_first_record() {
    let db = memory_db().await;
    let repo = DbPatientRepository { db };

    let first = repo.save(&patient("Ana Lima", 30, "111")).await.unwrap();
    let result = repo.save(&patient("Bruno Reis", 40, "111")).await;

    assert!(
        matches!(result, Err(ClinicServiceError::NationalIdTaken)),
        "expected NationalIdTaken, got {result:?}"
    );
    assert_eq!(repo.count().await.unwrap(), 1);
    let kept = repo.find_by_national_id("111").await.unwrap().unwrap();
    assert_eq!(kept, first);
}

#[tokio::test]
async fn should_reject_duplicate_license_number() {
    let db = memory_db().await;
    let repo = DbPsychologistRepository { db };

    repo.save(&psychologist("Carla Dias", 45, "06/1", None))
        .await
        .unwrap();
    let result = repo
        .save(&psychologist("Davi Rocha", 50, "06/1", None))
        .await;

    assert!(
        matches!(result, Err(ClinicServiceError::LicenseNumberTaken)),
        "expected LicenseNumberTaken, got {result:?}"
    );
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn should_attach_approach_to_psychologist() {
    let db = memory_db().await;
    let approaches = DbApproachRepository { db: db.clone() };
    let repo = DbPsychologistRepository { db };

    let cbt = approaches.save(&approach("CBT")).await.unwrap();
    let saved = repo
        .save(&psychologist("Carla Dias", 45, "06/1", Some(cbt.id)))
        .await
        .unwrap();

    assert_eq!(saved.approach, Some(cbt));
    let by_crp = repo.find_by_license_number("06/1").await.unwrap().unwrap();
    assert_eq!(by_crp, saved);
}

#[tokio::test]
async fn should_reject_psychologist_with_unknown_approach() {
    let db = memory_db().await;
    let repo = DbPsychologistRepository { db };

    let result = repo
        .save(&psychologist("Carla Dias", 45, "06/1", Some(42)))
        .await;

    assert!(
        matches!(result, Err(ClinicServiceError::ApproachNotFound)),
        "expected ApproachNotFound, got {result:?}"
    );
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn should_refuse_to_delete_approach_in_use() {
    let db = memory_db().await;
    let approaches = DbApproachRepository { db: db.clone() };
    let psychologists = DbPsychologistRepository { db };

    let cbt = approaches.save(&approach("CBT")).await.unwrap();
    psychologists
        .save(&psychologist("Carla Dias", 45, "06/1", Some(cbt.id)))
        .await
        .unwrap();

    let result = approaches.delete(cbt.id).await;
    assert!(
        matches!(result, Err(ClinicServiceError::ApproachInUse)),
        "expected ApproachInUse, got {result:?}"
    );
    assert!(approaches.find_by_id(cbt.id).await.unwrap().is_some());
}

#[tokio::test]
async fn should_delete_approach_once_unreferenced() {
    let db = memory_db().await;
    let approaches = DbApproachRepository { db: db.clone() };
    let psychologists = DbPsychologistRepository { db };

    let cbt = approaches.save(&approach("CBT")).await.unwrap();
    let psy = psychologists
        .save(&psychologist("Carla Dias", 45, "06/1", Some(cbt.id)))
        .await
        .unwrap();
    assert!(matches!(
        approaches.delete(cbt.id).await,
        Err(ClinicServiceError::ApproachInUse)
    ));

    assert!(psychologists.delete(psy.person.id).await.unwrap());
    assert!(approaches.delete(cbt.id).await.unwrap());
    assert!(!approaches.delete(cbt.id).await.unwrap());
    assert_eq!(approaches.count().await.unwrap(), 0);
}

#[tokio::test]
async fn should_overwrite_approach_when_id_given() {
    let db = memory_db().await;
    let repo = DbApproachRepository { db };

    let cbt = repo.save(&approach("CBT")).await.unwrap();
    let renamed = repo
        .save(&ApproachInput {
            id: Some(cbt.id),
            description: "TCC".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(renamed.id, cbt.id);
    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(
        repo.find_by_id(cbt.id).await.unwrap().unwrap().description,
        "TCC"
    );
}

#[tokio::test]
async fn should_cascade_appointments_when_patient_deleted() {
    let db = memory_db().await;
    let patients = DbPatientRepository { db: db.clone() };
    let psychologists = DbPsychologistRepository { db: db.clone() };
    let appointments = DbAppointmentRepository { db };

    let psy = psychologists
        .save(&psychologist("Carla Dias", 45, "06/1", None))
        .await
        .unwrap();
    let pat = patients.save(&patient("Ana Lima", 30, "111")).await.unwrap();
    let other = patients.save(&patient("Bruno Reis", 40, "222")).await.unwrap();
    appointments
        .save(&appointment(psy.person.id, pat.person.id, "2024-01-01"))
        .await
        .unwrap();
    appointments
        .save(&appointment(psy.person.id, pat.person.id, "2024-01-08"))
        .await
        .unwrap();
    let kept = appointments
        .save(&appointment(psy.person.id, other.person.id, "2024-01-02"))
        .await
        .unwrap();

    assert!(patients.delete(pat.person.id).await.unwrap());

    assert!(patients.find_by_id(pat.person.id).await.unwrap().is_none());
    assert!(
        appointments
            .list_by_patient(pat.person.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(appointments.list(None).await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn should_cascade_appointments_when_psychologist_deleted() {
    let db = memory_db().await;
    let patients = DbPatientRepository { db: db.clone() };
    let psychologists = DbPsychologistRepository { db: db.clone() };
    let appointments = DbAppointmentRepository { db };

    let psy = psychologists
        .save(&psychologist("Carla Dias", 45, "06/1", None))
        .await
        .unwrap();
    let pat = patients.save(&patient("Ana Lima", 30, "111")).await.unwrap();
    appointments
        .save(&appointment(psy.person.id, pat.person.id, "2024-01-01"))
        .await
        .unwrap();

    assert!(psychologists.delete(psy.person.id).await.unwrap());

    assert_eq!(appointments.count().await.unwrap(), 0);
    assert!(patients.find_by_id(pat.person.id).await.unwrap().is_some());
}

#[tokio::test]
async fn should_report_missing_id_on_delete() {
    let db = memory_db().await;
    let repo = DbPatientRepository { db };

    assert!(!repo.delete(999).await.unwrap());
}

#[tokio::test]
async fn should_reject_appointment_for_unknown_psychologist() {
    let db = memory_db().await;
    let patients = DbPatientRepository { db: db.clone() };
    let appointments = DbAppointmentRepository { db };

    let pat = patients.save(&patient("Ana Lima", 30, "111")).await.unwrap();
    let result = appointments
        .save(&appointment(77, pat.person.id, "2024-01-01"))
        .await;

    assert!(
        matches!(result, Err(ClinicServiceError::PsychologistNotFound)),
        "expected PsychologistNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_filter_appointments_by_status() {
    let db = memory_db().await;
    let patients = DbPatientRepository { db: db.clone() };
    let psychologists = DbPsychologistRepository { db: db.clone() };
    let appointments = DbAppointmentRepository { db };

    let psy = psychologists
        .save(&psychologist("Carla Dias", 45, "06/1", None))
        .await
        .unwrap();
    let pat = patients.save(&patient("Ana Lima", 30, "111")).await.unwrap();
    let done = appointments
        .save(
            &appointment(psy.person.id, pat.person.id, "2024-01-01")
                .with_status(AppointmentStatus::Completed),
        )
        .await
        .unwrap();
    let open = appointments
        .save(&appointment(psy.person.id, pat.person.id, "2024-01-08"))
        .await
        .unwrap();

    assert_eq!(appointments.list_by_status(true).await.unwrap(), vec![done]);
    assert_eq!(appointments.list_by_status(false).await.unwrap(), vec![open.clone()]);
    assert_eq!(open.status, AppointmentStatus::InProgress);
    assert_eq!(
        appointments
            .list_by_psychologist(psy.person.id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn should_sort_lists_in_requested_direction() {
    let db = memory_db().await;
    let approaches = DbApproachRepository { db: db.clone() };
    let patients = DbPatientRepository { db: db.clone() };
    let psychologists = DbPsychologistRepository { db: db.clone() };
    let appointments = DbAppointmentRepository { db };

    for d in ["Gestalt", "CBT", "Psicanálise"] {
        approaches.save(&approach(d)).await.unwrap();
    }
    let sorted = approaches
        .list(Some(OrderBy {
            field: ApproachSortBy::Description,
            sort: Sort::Asc,
        }))
        .await
        .unwrap();
    let names: Vec<_> = sorted.iter().map(|a| a.description.as_str()).collect();
    assert_eq!(names, ["CBT", "Gestalt", "Psicanálise"]);

    patients.save(&patient("Ana Lima", 52, "111")).await.unwrap();
    patients.save(&patient("Bruno Reis", 19, "222")).await.unwrap();
    let by_age = patients
        .list(Some(OrderBy {
            field: PatientSortBy::Person(PersonSortBy::Age),
            sort: Sort::Asc,
        }))
        .await
        .unwrap();
    let ages: Vec<_> = by_age.iter().map(|p| p.person.age).collect();
    assert_eq!(ages, [19, 52]);

    let psy = psychologists
        .save(&psychologist("Carla Dias", 45, "06/1", None))
        .await
        .unwrap();
    for date in ["2024-01-02", "2024-03-01", "2024-02-15"] {
        appointments
            .save(&appointment(psy.person.id, by_age[0].person.id, date))
            .await
            .unwrap();
    }
    let newest_first = appointments
        .list(Some(OrderBy {
            field: AppointmentSortBy::Date,
            sort: Sort::Desc,
        }))
        .await
        .unwrap();
    let dates: Vec<_> = newest_first.iter().map(|a| a.date.as_str()).collect();
    assert_eq!(dates, ["2024-03-01", "2024-02-15", "2024-01-02"]);
}

#[tokio::test]
async fn should_list_users_of_both_kinds() {
    let db = memory_db().await;
    let patients = DbPatientRepository { db: db.clone() };
    let psychologists = DbPsychologistRepository { db: db.clone() };
    let users = DbUserRepository { db };

    let pat = patients.save(&patient("Ana Lima", 30, "111")).await.unwrap();
    let psy = psychologists
        .save(&psychologist("Carla Dias", 30, "06/1", None))
        .await
        .unwrap();
    patients.save(&patient("Bruno Reis", 41, "222")).await.unwrap();

    assert_eq!(users.count().await.unwrap(), 3);
    let aged_30 = users.find_by_age(30).await.unwrap();
    assert_eq!(
        aged_30,
        vec![User::Patient(pat.clone()), User::Psychologist(psy.clone())]
    );

    assert!(users.delete(psy.person.id).await.unwrap());
    assert!(psychologists.find_by_id(psy.person.id).await.unwrap().is_none());
    assert_eq!(
        users.find_by_id(pat.person.id).await.unwrap(),
        Some(User::Patient(pat))
    );
}
