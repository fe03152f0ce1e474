use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::StoreError;

pub(crate) const ITEM_NOT_FOUND: &str = "Item not found";
pub(crate) const NAME_REQUIRED: &str = "Name is required";
pub(crate) const NO_DATA_PROVIDED: &str = "No data provided";
pub(crate) const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub(crate) const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub(crate) const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub(crate) const BODY_TOO_LARGE: &str = "Request body too large";

/// Body of every client-facing error: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of confirmation responses: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Description of an unhandled fault, attached to 500 responses as a
/// response extension.
///
/// The client only ever sees the generic message; the middleware picks this
/// up and logs it next to the request id.
#[derive(Debug, Clone)]
pub struct Fault(pub String);

/// Errors surfaced by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Referenced resource is absent (404).
    NotFound(&'static str),

    /// Missing or unusable request data (400).
    InvalidInput(&'static str),

    /// Request body over the configured limit (413).
    PayloadTooLarge(&'static str),

    /// Anything else (500). Never shown to the client.
    Unhandled(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Builds a JSON `{"error": message}` response with the given status.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Builds the generic 500 response, carrying `fault` for the middleware.
pub(crate) fn internal_error_response(fault: String) -> Response {
    let mut response = error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR);
    response.extensions_mut().insert(Fault(fault));
    response
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound(message)
            | ApiError::InvalidInput(message)
            | ApiError::PayloadTooLarge(message) => {
                error_response(status, message)
            }
            ApiError::Unhandled(err) => internal_error_response(format!("{err:#}")),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(ITEM_NOT_FOUND),
            StoreError::InvalidInput(_) => ApiError::InvalidInput(NAME_REQUIRED),
        }
    }
}

/// Lets handlers propagate unexpected failures with `?`.
///
/// The in-memory store has no such failure today; the conversion is the
/// single entry point for one, and the middleware logs the cause with the
/// request id before the generic 500 reaches the client.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Unhandled(err)
    }
}
