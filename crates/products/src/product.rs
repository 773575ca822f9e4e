use serde::{Deserialize, Serialize};

use catalogd_core::{DomainError, DomainResult, ProductId};

/// A persisted catalog product.
///
/// Field names serialize in camelCase to match the public wire format
/// (`productId`, `productName`, `unitPrice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: f64,
}

impl Product {
    pub fn new(product_id: ProductId, product_name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            unit_price,
        }
    }
}

/// Validated create/update payload: everything a product carries except its id.
///
/// Construction goes through [`ProductDraft::new`], so a draft in hand is
/// already known to satisfy the persistence invariants (non-blank name,
/// finite non-negative price). The name is stored as given, not trimmed;
/// trimming applies to validation only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    product_name: String,
    unit_price: f64,
}

impl ProductDraft {
    pub fn new(product_name: impl Into<String>, unit_price: f64) -> DomainResult<Self> {
        let product_name = product_name.into();

        if product_name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be blank"));
        }
        // `>= 0.0` alone would accept NaN through the negated comparison.
        if !unit_price.is_finite() {
            return Err(DomainError::validation("unit price must be a finite number"));
        }
        if unit_price < 0.0 {
            return Err(DomainError::validation("unit price cannot be negative"));
        }

        Ok(Self {
            product_name,
            unit_price,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Materialize the draft into a product under the given store-assigned id.
    pub fn into_product(self, product_id: ProductId) -> Product {
        Product {
            product_id,
            product_name: self.product_name,
            unit_price: self.unit_price,
        }
    }
}
