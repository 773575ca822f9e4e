//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: infrastructure wiring (the product store behind its trait)
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request payload DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::cors::{Any, CorsLayer};

use catalogd_store::ProductStore;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests, which pass an in-memory store).
pub fn build_app(store: Arc<dyn ProductStore>) -> Router {
    let app_services = Arc::new(services::AppServices::new(store));

    // Any origin, per the public catalog contract.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(app_services))
        .layer(cors)
}
