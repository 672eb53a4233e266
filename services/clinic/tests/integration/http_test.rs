use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use clinic::router::build_router;

use crate::helpers::{KNOWN_CEP, UNKNOWN_CEP, test_state};

async fn server() -> TestServer {
    TestServer::new(build_router(test_state().await)).unwrap()
}

fn address_json() -> Value {
    json!({
        "cep": "01001-000",
        "logradouro": "Praça da Sé",
        "complemento": "lado ímpar",
        "bairro": "Sé",
        "localidade": "São Paulo",
        "uf": "SP"
    })
}

/// Drops the generated ids so a request body can be compared with a response.
fn without_ids(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        obj.remove("id");
        for nested in obj.values_mut() {
            *nested = without_ids(nested.take());
        }
    }
    value
}

#[tokio::test]
async fn should_serve_health_probes() {
    let server = server().await;

    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_create_and_fetch_approach() {
    let server = server().await;

    let created = server
        .post("/abordagem/incluir")
        .json(&json!({ "descricao": "CBT" }))
        .await;
    created.assert_status_ok();
    assert_eq!(
        created.text(),
        "Inclusão:Abordagem{ID: 1, Descrição: CBT}, efetuada com sucesso"
    );

    let fetched: Value = server.get("/abordagem/1").await.json();
    assert_eq!(fetched, json!({ "id": 1, "descricao": "CBT" }));
}

#[tokio::test]
async fn should_create_and_fetch_patient_with_identical_fields() {
    let server = server().await;
    let body = json!({
        "nomeCompleto": "Ana Lima",
        "email": "ana@example.com",
        "idade": 30,
        "cpf": "123.456.789-00",
        "endereco": address_json()
    });

    let created = server.post("/paciente/incluir").json(&body).await;
    created.assert_status_ok();
    assert!(created.text().starts_with("Inclusão:"), "{}", created.text());

    let fetched: Value = server.get("/paciente/1").await.json();
    assert_eq!(fetched["id"], 1);
    assert_eq!(fetched["atendimento"], json!([]));
    let mut expected = body;
    expected["atendimento"] = json!([]);
    assert_eq!(without_ids(fetched), expected);

    let by_cpf: Value = server.get("/paciente/cpf/123.456.789-00").await.json();
    assert_eq!(by_cpf["nomeCompleto"], "Ana Lima");
}

#[tokio::test]
async fn should_create_and_fetch_psychologist_with_identical_fields() {
    let server = server().await;
    server
        .post("/abordagem/incluir")
        .json(&json!({ "descricao": "CBT" }))
        .await
        .assert_status_ok();
    let body = json!({
        "nomeCompleto": "Carla Dias",
        "email": "carla@example.com",
        "idade": 45,
        "crp": "06/1",
        "abordagem": { "id": 1, "descricao": "CBT" },
        "endereco": address_json()
    });

    let created = server.post("/psicologo/incluir").json(&body).await;
    created.assert_status_ok();
    assert!(created.text().starts_with("Inclusão:"), "{}", created.text());

    let mut fetched: Value = server.get("/psicologo/1").await.json();
    if let Some(address) = fetched["endereco"].as_object_mut() {
        address.remove("id");
    }
    let mut expected = body;
    expected["id"] = json!(1);
    expected["atendimentos"] = json!([]);
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn should_create_and_fetch_appointment_with_identical_fields() {
    let server = server().await;
    server
        .post("/psicologo/incluir")
        .json(&json!({
            "nomeCompleto": "Carla Dias",
            "email": "carla@example.com",
            "idade": 45,
            "crp": "06/1"
        }))
        .await
        .assert_status_ok();
    server
        .post("/paciente/incluir")
        .json(&json!({
            "nomeCompleto": "Ana Lima",
            "email": "ana@example.com",
            "idade": 30,
            "cpf": "111"
        }))
        .await
        .assert_status_ok();
    let body = json!({
        "psicologo": { "id": 1 },
        "paciente": { "id": 2 },
        "tipoAtendimento": "Sessão",
        "atendimentoDate": "2024-01-01",
        "statusAtendimento": true
    });

    let created = server.post("/atendimento/incluir").json(&body).await;
    created.assert_status_ok();
    assert!(created.text().starts_with("Inclusão:"), "{}", created.text());

    let fetched: Value = server.get("/atendimento/1").await.json();
    let mut expected = body;
    expected["id"] = json!(1);
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn should_resolve_address_from_bare_cep() {
    let server = server().await;

    server
        .post("/psicologo/incluir")
        .json(&json!({
            "nomeCompleto": "Carla Dias",
            "email": "carla@example.com",
            "idade": 45,
            "crp": "06/1",
            "cep": KNOWN_CEP
        }))
        .await
        .assert_status_ok();
    server
        .post("/psicologo/incluir")
        .json(&json!({
            "nomeCompleto": "Davi Rocha",
            "email": "davi@example.com",
            "idade": 50,
            "crp": "06/2",
            "cep": UNKNOWN_CEP
        }))
        .await
        .assert_status_ok();

    let first: Value = server.get("/psicologo/1").await.json();
    assert_eq!(first["endereco"]["localidade"], "São Paulo");
    assert_eq!(first["abordagem"], Value::Null);
    let second: Value = server.get("/psicologo/2").await.json();
    assert_eq!(second["endereco"], Value::Null);
}

#[tokio::test]
async fn should_reject_invalid_cep_with_bad_request() {
    let server = server().await;

    let response = server
        .post("/paciente/incluir")
        .json(&json!({
            "nomeCompleto": "Ana Lima",
            "email": "ana@example.com",
            "idade": 30,
            "cpf": "111",
            "cep": "12ab"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_POSTAL_CODE");
}

#[tokio::test]
async fn should_report_rejected_inclusion_with_ok_status() {
    let server = server().await;
    let body = json!({
        "nomeCompleto": "Ana Lima",
        "email": "ana@example.com",
        "idade": 30,
        "cpf": "111"
    });

    server.post("/paciente/incluir").json(&body).await.assert_status_ok();
    let second = server.post("/paciente/incluir").json(&body).await;

    second.assert_status_ok();
    assert_eq!(second.text(), "Inclusão não efetuada: cpf already registered");
}

#[tokio::test]
async fn should_return_null_for_missing_record() {
    let server = server().await;

    let response = server.get("/abordagem/42").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[tokio::test]
async fn should_confirm_delete_of_missing_id() {
    let server = server().await;

    let response = server.delete("/paciente/999/excluir").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Exclusão do id : 999, efetuada com sucesso.");
}

#[tokio::test]
async fn should_reject_unknown_sort_field() {
    let server = server().await;

    let response = server
        .get("/abordagem/listar")
        .add_query_param("ordenarPor", "altura")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "UNKNOWN_SORT_FIELD");
}

#[tokio::test]
async fn should_sort_listing_by_query_field() {
    let server = server().await;
    for d in ["Gestalt", "CBT"] {
        server
            .post("/abordagem/incluir")
            .json(&json!({ "descricao": d }))
            .await
            .assert_status_ok();
    }

    let plain: Value = server.get("/abordagem/listar").await.json();
    let sorted: Value = server
        .get("/abordagem/listar")
        .add_query_param("ordenarPor", "descricao")
        .await
        .json();

    assert_eq!(plain[0]["descricao"], "Gestalt");
    assert_eq!(sorted[0]["descricao"], "CBT");
}

#[tokio::test]
async fn should_embed_appointments_and_cascade_on_delete() {
    let server = server().await;
    server
        .post("/psicologo/incluir")
        .json(&json!({
            "nomeCompleto": "Carla Dias",
            "email": "carla@example.com",
            "idade": 45,
            "crp": "06/1"
        }))
        .await
        .assert_status_ok();
    server
        .post("/paciente/incluir")
        .json(&json!({
            "nomeCompleto": "Ana Lima",
            "email": "ana@example.com",
            "idade": 30,
            "cpf": "111"
        }))
        .await
        .assert_status_ok();
    server
        .post("/atendimento/incluir")
        .json(&json!({
            "psicologo": { "id": 1 },
            "paciente": { "id": 2 },
            "tipoAtendimento": "Sessão",
            "atendimentoDate": "2024-01-01",
            "statusAtendimento": true
        }))
        .await
        .assert_status_ok();

    let psychologist: Value = server.get("/psicologo/1").await.json();
    assert_eq!(psychologist["atendimentos"][0]["paciente"]["id"], 2);
    let completed: Value = server.get("/atendimento/status/true").await.json();
    assert_eq!(completed.as_array().map(Vec::len), Some(1));
    let of_patient: Value = server.get("/paciente/2/atendimentos").await.json();
    assert_eq!(of_patient[0]["tipoAtendimento"], "Sessão");

    server.delete("/paciente/2/excluir").await.assert_status_ok();

    let all: Value = server.get("/atendimento/listar").await.json();
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn should_list_users_with_kind_tag() {
    let server = server().await;
    server
        .post("/paciente/incluir")
        .json(&json!({
            "nomeCompleto": "Ana Lima",
            "email": "ana@example.com",
            "idade": 30,
            "cpf": "111"
        }))
        .await
        .assert_status_ok();

    let users: Value = server.get("/usuario/listar").await.json();
    assert_eq!(users[0]["tipo"], "paciente");
    let aged: Value = server.get("/usuario/idade/30").await.json();
    assert_eq!(aged.as_array().map(Vec::len), Some(1));
    let nobody: Value = server.get("/usuario/idade/31").await.json();
    assert_eq!(nobody, json!([]));
}

#[tokio::test]
async fn should_render_summary_and_listing_pages() {
    let server = server().await;
    server
        .post("/abordagem/incluir")
        .json(&json!({ "descricao": "<CBT>" }))
        .await
        .assert_status_ok();

    let index = server.get("/").await;
    index.assert_status_ok();
    assert!(index.text().contains("<li>Abordagens: 1</li>"));

    let page = server.get("/abordagem/listagem").await.text();
    assert!(page.contains("&lt;CBT&gt;"));
    assert!(!page.contains("<CBT>"));
}
