use clinic::error::ClinicServiceError;
use clinic::seed::{SeedError, SeedStep, run_all};
use clinic_domain::appointment::AppointmentStatus;
use clinic_testing::fixture::SeedDir;

use crate::helpers::{FAILING_CEP, KNOWN_CEP, UNKNOWN_CEP, approach, test_state};

fn full_seed_dir() -> SeedDir {
    let dir = SeedDir::new();
    dir.write("abordagem.txt", "CBT\n")
        .write(
            "psicologo.txt",
            &format!("Carla Dias;carla@example.com;45;06/1;1;{KNOWN_CEP}\n"),
        )
        .write(
            "paciente.txt",
            &format!("Ana Lima;ana@example.com;30;111;{UNKNOWN_CEP}\n"),
        )
        .write("atendimento.txt", "1;2;2024-01-01;Session;true\n");
    dir
}

#[tokio::test]
async fn should_seed_single_approach() {
    let state = test_state().await;
    let dir = SeedDir::new();
    dir.write("abordagem.txt", "CBT\n");

    SeedStep::Approaches.run(&state, dir.path()).await.unwrap();

    let service = state.approach_service();
    assert_eq!(service.count().await.unwrap(), 1);
    assert_eq!(service.get(1).await.unwrap().unwrap().description, "CBT");
}

#[tokio::test]
async fn should_seed_completed_appointment_after_its_users() {
    let state = test_state().await;
    let dir = full_seed_dir();

    run_all(&state, dir.path()).await.unwrap();

    let completed = state.appointment_service().list_by_status(true).await.unwrap();
    assert_eq!(completed.len(), 1);
    let appointment = &completed[0];
    assert_eq!(appointment.psychologist_id, 1);
    assert_eq!(appointment.patient_id, 2);
    assert_eq!(appointment.date, "2024-01-01");
    assert_eq!(appointment.kind, "Session");
    assert_eq!(appointment.status, AppointmentStatus::Completed);
}

#[tokio::test]
async fn should_resolve_approach_and_address_for_seeded_psychologist() {
    let state = test_state().await;
    let dir = full_seed_dir();

    run_all(&state, dir.path()).await.unwrap();

    let psychologist = state.psychologist_service().get(1).await.unwrap().unwrap();
    assert_eq!(psychologist.license_number, "06/1");
    assert_eq!(
        psychologist.approach.map(|a| a.description),
        Some("CBT".to_owned())
    );
    let address = psychologist.person.address.expect("address from lookup");
    assert_eq!(address.city, "São Paulo");

    let patient = state.patient_service().get(2).await.unwrap().unwrap();
    assert!(
        patient.person.address.is_none(),
        "unknown postal code should leave the patient without address"
    );
}

#[tokio::test]
async fn should_load_psychologist_without_approach_when_id_missing_or_unknown() {
    let state = test_state().await;
    let dir = SeedDir::new();
    dir.write(
        "psicologo.txt",
        &format!(
            "Carla Dias;carla@example.com;45;06/1;;{KNOWN_CEP}\n\
             Davi Rocha;davi@example.com;50;06/2;9;{KNOWN_CEP}\n"
        ),
    );

    SeedStep::Psychologists.run(&state, dir.path()).await.unwrap();

    let all = state.psychologist_service().list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|p| p.approach.is_none()));
}

#[tokio::test]
async fn should_keep_loading_after_rejected_record() {
    let state = test_state().await;
    let dir = SeedDir::new();
    dir.write(
        "paciente.txt",
        &format!(
            "Ana Lima;ana@example.com;30;111;{KNOWN_CEP}\n\
             Bruno Reis;bruno@example.com;40;111;{KNOWN_CEP}\n\
             Caio Nunes;caio@example.com;17;333;{KNOWN_CEP}\n\
             Duda Alves;duda@example.com;22;444;{KNOWN_CEP}\n"
        ),
    );

    SeedStep::Patients.run(&state, dir.path()).await.unwrap();

    let cpfs: Vec<_> = state
        .patient_service()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.national_id)
        .collect();
    assert_eq!(cpfs, ["111", "444"]);
}

#[tokio::test]
async fn should_abort_when_seed_file_missing() {
    let state = test_state().await;
    let dir = SeedDir::new();

    let result = run_all(&state, dir.path()).await;

    assert!(
        matches!(&result, Err(SeedError::Io { path, .. }) if path.ends_with("abordagem.txt")),
        "expected Io error for abordagem.txt, got {result:?}"
    );
}

#[tokio::test]
async fn should_abort_on_wrong_field_count() {
    let state = test_state().await;
    let dir = SeedDir::new();
    dir.write("atendimento.txt", "1;2;2024-01-01;Session\n");

    let result = SeedStep::Appointments.run(&state, dir.path()).await;

    assert!(
        matches!(result, Err(SeedError::Parse { line: 1, .. })),
        "expected Parse error on line 1, got {result:?}"
    );
}

#[tokio::test]
async fn should_abort_on_unparsable_status() {
    let state = test_state().await;
    let dir = SeedDir::new();
    dir.write("atendimento.txt", "1;2;2024-01-01;Session;talvez\n");

    let result = SeedStep::Appointments.run(&state, dir.path()).await;

    assert!(
        matches!(result, Err(SeedError::Parse { .. })),
        "expected Parse error, got {result:?}"
    );
}

#[tokio::test]
async fn should_abort_on_invalid_postal_code() {
    let state = test_state().await;
    let dir = SeedDir::new();
    dir.write("paciente.txt", "Ana Lima;ana@example.com;30;111;abc\n");

    let result = SeedStep::Patients.run(&state, dir.path()).await;

    assert!(
        matches!(
            result,
            Err(SeedError::Service(ClinicServiceError::InvalidPostalCode(_)))
        ),
        "expected InvalidPostalCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_abort_when_lookup_fails() {
    let state = test_state().await;
    let dir = SeedDir::new();
    dir.write(
        "paciente.txt",
        &format!("Ana Lima;ana@example.com;30;111;{FAILING_CEP}\n"),
    );

    let result = SeedStep::Patients.run(&state, dir.path()).await;

    assert!(
        matches!(
            result,
            Err(SeedError::Service(ClinicServiceError::AddressLookup(_)))
        ),
        "expected AddressLookup, got {result:?}"
    );
    assert_eq!(state.patient_service().count().await.unwrap(), 0);
}

#[tokio::test]
async fn should_not_duplicate_rows_when_run_twice() {
    let state = test_state().await;
    let dir = full_seed_dir();

    run_all(&state, dir.path()).await.unwrap();
    run_all(&state, dir.path()).await.unwrap();

    assert_eq!(state.approach_service().count().await.unwrap(), 1);
    assert_eq!(state.psychologist_service().count().await.unwrap(), 1);
    assert_eq!(state.patient_service().count().await.unwrap(), 1);
    assert_eq!(state.appointment_service().count().await.unwrap(), 1);
    assert_eq!(state.user_service().count().await.unwrap(), 2);
}

#[tokio::test]
async fn should_skip_step_when_table_already_populated() {
    let state = test_state().await;
    let service = state.approach_service();
    assert!(service.include(approach("CBT")).await.is_included());
    let dir = SeedDir::new();
    dir.write("abordagem.txt", "Gestalt\nPsicanálise\n");

    assert!(SeedStep::Approaches.already_loaded(&state).await.unwrap());
    SeedStep::Approaches.run(&state, dir.path()).await.unwrap();

    let all = service.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "CBT");
    assert!(!SeedStep::Users.already_loaded(&state).await.unwrap());
}

#[tokio::test]
async fn should_finish_loading_when_first_record_cannot_be_found_by_key() {
    let state = test_state().await;
    let dir = SeedDir::new();
    dir.write(
        "paciente.txt",
        &format!(
            "Caio Nunes;caio@example.com;17;333;{KNOWN_CEP}\n\
             Duda Alves;duda@example.com;22;444;{KNOWN_CEP}\n"
        ),
    )
    .write(
        "psicologo.txt",
        &format!(
            "Eva Costa;eva@example.com;16;06/9;;{KNOWN_CEP}\n\
             Fabio Luz;fabio@example.com;38;06/8;;{KNOWN_CEP}\n"
        ),
    );

    SeedStep::Patients.run(&state, dir.path()).await.unwrap();
    SeedStep::Psychologists.run(&state, dir.path()).await.unwrap();

    let patients = state.patient_service();
    assert!(patients.find_by_national_id("333").await.unwrap().is_none());
    assert!(patients.find_by_national_id("444").await.unwrap().is_some());
    let psychologists = state.psychologist_service();
    assert!(psychologists.find_by_license_number("06/9").await.unwrap().is_none());
    assert!(psychologists.find_by_license_number("06/8").await.unwrap().is_some());
}

#[tokio::test]
async fn should_find_seeded_users_by_their_keys() {
    let state = test_state().await;
    let dir = full_seed_dir();

    run_all(&state, dir.path()).await.unwrap();

    let psychologist = state
        .psychologist_service()
        .find_by_license_number("06/1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(psychologist.person.full_name, "Carla Dias");
    let patient = state
        .patient_service()
        .find_by_national_id("111")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(patient.person.full_name, "Ana Lima");
}
