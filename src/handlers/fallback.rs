use axum::{http::StatusCode, response::Response};

use super::shared_types::{error_response, ENDPOINT_NOT_FOUND, METHOD_NOT_ALLOWED};

/// Fallback for paths no route matches.
pub async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, ENDPOINT_NOT_FOUND)
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed_handler() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}
