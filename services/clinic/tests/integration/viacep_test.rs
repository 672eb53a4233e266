use clinic::domain::repository::AddressLookup;
use clinic::error::ClinicServiceError;
use clinic::infra::viacep::ViaCepClient;
use clinic_domain::postal_code::PostalCode;

use crate::helpers::{FAILING_CEP, KNOWN_CEP, UNKNOWN_CEP, spawn_viacep};

async fn client() -> ViaCepClient {
    ViaCepClient::new(&format!("{}/", spawn_viacep().await))
}

#[tokio::test]
async fn should_map_found_address() {
    let client = client().await;

    let address = client
        .lookup(&PostalCode::parse("01001-000").unwrap())
        .await
        .unwrap()
        .expect("known postal code");

    assert_eq!(address.postal_code, "01001-000");
    assert_eq!(address.street, "Praça da Sé");
    assert_eq!(address.neighborhood, "Sé");
    assert_eq!(address.city, "São Paulo");
    assert_eq!(address.state, "SP");
}

#[tokio::test]
async fn should_return_none_for_unknown_postal_code() {
    let client = client().await;

    let address = client
        .lookup(&PostalCode::parse(UNKNOWN_CEP).unwrap())
        .await
        .unwrap();

    assert!(address.is_none());
}

#[tokio::test]
async fn should_propagate_upstream_failure() {
    let client = client().await;

    let result = client.lookup(&PostalCode::parse(FAILING_CEP).unwrap()).await;

    assert!(
        matches!(result, Err(ClinicServiceError::AddressLookup(_))),
        "expected AddressLookup, got {result:?}"
    );
}

#[tokio::test]
async fn should_propagate_connection_failure() {
    let client = ViaCepClient::new("http://127.0.0.1:1");

    let result = client.lookup(&PostalCode::parse(KNOWN_CEP).unwrap()).await;

    assert!(
        matches!(result, Err(ClinicServiceError::AddressLookup(_))),
        "expected AddressLookup, got {result:?}"
    );
}
