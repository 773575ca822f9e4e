//! In-memory product store for tests and DB-less runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use catalogd_core::ProductId;
use catalogd_products::{Product, ProductDraft};

use crate::error::StoreResult;
use crate::store::ProductStore;

#[derive(Debug)]
struct Inner {
    rows: BTreeMap<ProductId, Product>,
    // Monotonic, never reused after delete (auto-increment semantics).
    next_id: i64,
}

/// Mutex-guarded map with auto-increment ids, mirroring the MySQL
/// backend's contract exactly (ordering, absence-as-`None`, zero-row
/// mutations logged only).
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: Mutex<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get_all(&self) -> StoreResult<Vec<Product>> {
        let inner = self.inner.lock().unwrap();
        // BTreeMap iteration order is id ascending.
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&id).cloned())
    }

    async fn create(&self, draft: &ProductDraft) -> StoreResult<Option<Product>> {
        let mut inner = self.inner.lock().unwrap();
        let id = ProductId::new(inner.next_id);
        inner.next_id += 1;

        let product = draft.clone().into_product(id);
        inner.rows.insert(id, product.clone());
        Ok(Some(product))
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(row) => {
                row.product_name = draft.product_name().to_string();
                row.unit_price = draft.unit_price();
            }
            None => tracing::warn!(product_id = %id, "update matched no product row"),
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.rows.remove(&id).is_none() {
            tracing::warn!(product_id = %id, "delete matched no product row");
        }
        Ok(())
    }
}
