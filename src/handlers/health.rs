use axum::{http::StatusCode, Json};

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "devops-api";

#[derive(serde::Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Responds with the health status of the server.
///
/// The check only confirms the web server is running; it does not depend on
/// the item store's contents.
///
/// # Responses
/// - `200 OK` with `{ "status": "healthy", "service": "devops-api" }`
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: SERVICE_NAME,
        }),
    )
}
