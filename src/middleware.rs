//! Request middleware.
//!
//! Every request passes through [`track_requests`], which:
//!
//! - assigns a random correlation id and a start instant, stored as a
//!   [`RequestContext`] request extension for handlers to read,
//! - logs "Request started" / "Request completed",
//! - records the request in the metrics registry,
//! - stamps the `X-Request-ID` response header,
//! - logs the fault behind any 500 response at error level.
//!
//! Handler panics are turned into 500 responses by [`catch_panic_layer`],
//! which sits inside this middleware so the post-phase still runs for them.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::any::Any;
use std::net::SocketAddr;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::Instrument;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::handlers::{internal_error_response, Fault};

/// Response header carrying the correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request values shared between the middleware and handlers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub started: Instant,
}

impl RequestContext {
    fn new() -> Self {
        RequestContext {
            request_id: Uuid::new_v4().to_string(),
            started: Instant::now(),
        }
    }
}

/// Wraps every request with correlation id, timing, logging and metrics.
pub async fn track_requests(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    // ---
    let ctx = RequestContext::new();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default();

    tracing::info!(
        request_id = %ctx.request_id,
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        "Request started"
    );

    req.extensions_mut().insert(ctx.clone());

    let span = tracing::info_span!("request", request_id = %ctx.request_id);
    let mut response = next.run(req).instrument(span).await;

    let elapsed = ctx.started.elapsed();
    let status = response.status().as_u16();

    if let Some(Fault(fault)) = response.extensions().get::<Fault>() {
        tracing::error!(
            request_id = %ctx.request_id,
            error = %fault,
            "Internal server error"
        );
    }

    state
        .metrics()
        .record_http_request(&method, &path, status, elapsed);

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        request_id = %ctx.request_id,
        method = %method,
        path = %path,
        status_code = status,
        duration_ms = round_ms(elapsed.as_secs_f64() * 1000.0),
        "Request completed"
    );

    response
}

fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

/// Converts a handler panic into the generic 500 response.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    internal_error_response(format!("handler panicked: {details}"))
}

/// Layer turning handler panics into 500 responses.
pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_response as fn(Box<dyn Any + Send + 'static>) -> Response)
}
