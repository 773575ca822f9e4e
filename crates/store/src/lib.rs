//! Persistence layer for the product catalog.
//!
//! All SQL lives here. The [`ProductStore`] trait is the seam between the
//! HTTP layer and storage: [`MySqlProductStore`] is the production backend,
//! [`InMemoryProductStore`] its in-process twin for tests and DB-less runs.

pub mod error;
pub mod in_memory;
pub mod mysql;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use in_memory::InMemoryProductStore;
pub use mysql::MySqlProductStore;
pub use store::ProductStore;
