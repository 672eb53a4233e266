use reqwest::Client;
use serde::Deserialize;

use clinic_domain::postal_code::PostalCode;

use crate::domain::repository::AddressLookup;
use crate::domain::types::AddressInput;
use crate::error::ClinicServiceError;

/// HTTP client implementing `AddressLookup` against ViaCEP
/// (`GET {base_url}/{cep}/json/`).
#[derive(Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, cep: &PostalCode) -> String {
        format!("{}/{}/json/", self.base_url, cep)
    }
}

impl AddressLookup for ViaCepClient {
    async fn lookup(&self, cep: &PostalCode) -> Result<Option<AddressInput>, ClinicServiceError> {
        let url = self.url(cep);
        tracing::debug!(%url, "viacep lookup");
        let body: ViaCepResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.into_address())
    }
}

/// ViaCEP answer. Unknown postal codes come back as `{"erro": true}`
/// (older deployments send the string `"true"`).
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl ViaCepResponse {
    fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    fn into_address(self) -> Option<AddressInput> {
        if self.is_not_found() {
            return None;
        }
        Some(AddressInput {
            postal_code: self.cep,
            street: self.logradouro,
            complement: self.complemento,
            neighborhood: self.bairro,
            city: self.localidade,
            state: self.uf,
        })
    }
}
