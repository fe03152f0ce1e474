//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` holds the item
//! repository and the metrics implementation.
//!
//! The state is cheaply cloneable (`Arc` internally) so it can be handed to
//! each request handler and to the request middleware without copying the
//! underlying store.

use crate::domain::{ItemRepositoryPtr, MetricsPtr};

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the Dependency Injection container for the application.
/// Handlers depend on the `ItemRepository` and `Metrics` abstractions, not on
/// concrete implementations, which keeps the store swappable and lets tests
/// wire in recording or no-op metrics.
///
/// # Lifecycle
///
/// 1. Created once in `create_router_with()` during application startup
/// 2. Attached to the Axum router via `.with_state(app_state)`
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers extract via `State(state): State<AppState>`
#[derive(Clone)]
pub(crate) struct AppState {
    /// Metrics implementation for recording request counts and durations.
    ///
    /// Either Prometheus-backed (production) or no-op (metrics disabled).
    metrics: MetricsPtr,

    /// Item storage. All mutation goes through this one instance, which does
    /// its own locking.
    repository: ItemRepositoryPtr,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr, repository: ItemRepositoryPtr) -> Self {
        // ---
        AppState {
            metrics,
            repository,
        }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get a reference to the repository implementation.
    pub(crate) fn repository(&self) -> &ItemRepositoryPtr {
        // ---
        &self.repository
    }
}
