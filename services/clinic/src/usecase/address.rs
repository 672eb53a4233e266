use clinic_domain::postal_code::PostalCode;

use crate::domain::repository::AddressLookup;
use crate::domain::types::AddressInput;
use crate::error::ClinicServiceError;

/// Postal-code lookup. No retry and no cache; each call is one upstream request.
pub struct AddressService<L: AddressLookup> {
    pub client: L,
}

impl<L: AddressLookup> AddressService<L> {
    /// `Ok(None)` when the postal code is unknown upstream.
    pub async fn find(&self, raw_cep: &str) -> Result<Option<AddressInput>, ClinicServiceError> {
        let cep = PostalCode::parse(raw_cep)?;
        self.client.lookup(&cep).await
    }
}
