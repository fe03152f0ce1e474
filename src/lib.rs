// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::cors::CorsLayer;

use handlers::{
    create_item, delete_item, get_item, health_check, list_items, method_not_allowed_handler,
    metrics_handler, not_found_handler, update_item,
};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod middleware;
mod telemetry;

pub use config::*;
pub use middleware::{RequestContext, REQUEST_ID_HEADER};
pub use telemetry::init_tracing;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_memory_repository, // ---
    create_noop_metrics,
    create_prom_metrics,
};

/// Largest request body the item handlers will buffer (2 MiB).
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the HTTP router with configuration read from environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    let config = AppConfig::from_env()?;
    create_router_with(&config)
}

/// Build the HTTP router for the given configuration.
///
/// Every call creates a fresh, empty item store and its own metrics registry.
pub fn create_router_with(config: &AppConfig) -> Result<Router> {
    // ---
    let metrics = match config.metrics_type {
        MetricsType::Prometheus => create_prom_metrics()?,
        MetricsType::Noop => create_noop_metrics()?,
    };
    let repository = create_memory_repository()?;

    Ok(build_router(AppState::new(metrics, repository)))
}

fn build_router(app_state: AppState) -> Router {
    // ---
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Innermost first: panics become 500s and CORS preflights are answered
        // before the request middleware sees the response.
        .layer(middleware::catch_panic_layer())
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::track_requests,
        ))
        .with_state(app_state)
}
