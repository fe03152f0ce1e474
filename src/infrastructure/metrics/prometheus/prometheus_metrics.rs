//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the Prometheus exposition format. Series are emitted through the `metrics`
//! crate macros while a recorder owned by this struct is set as the local
//! recorder, so no process-wide registry is involved.

use metrics::{counter, histogram, with_local_recorder};
use metrics_exporter_prometheus::{PrometheusHandle, PrometheusRecorder};
use std::time::Duration;

use super::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};
use crate::domain::Metrics;

/// Prometheus-based metrics implementation.
///
/// Counter and histogram handles are registered inside the recorder on first
/// use; the recorder's own storage is atomic, so concurrent requests can
/// record without extra locking here.
pub struct PrometheusMetrics {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl PrometheusMetrics {
    pub fn new() -> anyhow::Result<Self> {
        tracing::info!("Creating Prometheus metrics");
        let recorder = super::build_recorder()?;
        let handle = recorder.handle();

        with_local_recorder(&recorder, super::describe_http_metrics);

        Ok(PrometheusMetrics { recorder, handle })
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        self.handle.render()
    }

    fn record_http_request(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        tracing::debug!("Recording HTTP request metrics");
        let method = method.to_string();
        let endpoint = path.to_string();

        with_local_recorder(&self.recorder, || {
            counter!(
                HTTP_REQUESTS_TOTAL,
                "method" => method.clone(),
                "endpoint" => endpoint.clone(),
                "status" => status.to_string()
            )
            .increment(1);

            histogram!(
                HTTP_REQUEST_DURATION_SECONDS,
                "method" => method,
                "endpoint" => endpoint
            )
            .record(elapsed.as_secs_f64());
        });
    }
}
