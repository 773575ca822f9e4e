//! Request payload DTOs.
//!
//! Responses serialize `catalogd_products::Product` directly; only inbound
//! payloads need a separate shape (no id, nullable name).

use serde::Deserialize;

use catalogd_core::DomainResult;
use catalogd_products::ProductDraft;

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// `productName` may be absent or null (rejected downstream as blank);
/// an absent `unitPrice` defaults to zero, which passes validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub unit_price: f64,
}

impl ProductPayload {
    /// Validate into a draft. Runs before any existence check or store call.
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        ProductDraft::new(self.product_name.unwrap_or_default(), self.unit_price)
    }
}
