use std::sync::Arc;
use std::time::Duration;

/// Abstraction for application metrics (counters, histograms).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Count one completed request and record how long it took.
    ///
    /// Called once per request from the middleware post-phase, on every
    /// code path including 404/500 responses.
    fn record_http_request(&self, method: &str, path: &str, status: u16, elapsed: Duration);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
