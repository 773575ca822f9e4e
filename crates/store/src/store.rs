//! The storage seam between HTTP handlers and the database.

use async_trait::async_trait;

use catalogd_core::ProductId;
use catalogd_products::{Product, ProductDraft};

use crate::error::StoreResult;

/// Persistence operations for the product catalog.
///
/// Contract shared by every backend:
/// - `get_all` returns rows ordered by id ascending; an empty table is an
///   empty vec, never an error.
/// - `get_by_id` returns `None` for a missing row; `None` is value-level,
///   not a fault.
/// - `create` persists name and price, lets the backend assign the id, and
///   returns the re-read row. `None` means the insert reported zero rows
///   or the generated key was unavailable.
/// - `update`/`delete` are unconditional single-row statements; zero rows
///   affected is logged, not surfaced (the caller has already probed
///   existence).
///
/// Each call owns its own connection scope; there is no cross-call
/// transaction. Consistency relies on single-statement atomicity in the
/// backend.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_all(&self) -> StoreResult<Vec<Product>>;
    async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>>;
    async fn create(&self, draft: &ProductDraft) -> StoreResult<Option<Product>>;
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<()>;
    async fn delete(&self, id: ProductId) -> StoreResult<()>;
}
