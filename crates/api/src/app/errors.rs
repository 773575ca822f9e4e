use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalogd_core::DomainError;
use catalogd_store::StoreError;

/// Map a client-caused domain failure to a response.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

/// Map a store fault to an opaque 500.
///
/// The detail is logged and deliberately kept out of the response body;
/// persistence failure internals never reach the client.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "product store failure");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
