mod prometheus_metrics;
mod recorder;

pub use prometheus_metrics::PrometheusMetrics;
use std::sync::Arc;

// Re-export utilities for internal use within this module
pub(crate) use recorder::{build_recorder, describe_http_metrics};

/// Label-free series names, shared with tests.
pub(crate) const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub(crate) const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Creates a new Prometheus metrics implementation.
///
/// Each instance owns its own recorder and registry, so rendering only shows
/// requests served by the router this instance was wired into.
///
/// Returns a fully initialized metrics instance ready for use.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");

    Ok(Arc::new(PrometheusMetrics::new()?))
}
