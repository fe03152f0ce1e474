use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusRecorder};

use super::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};

/// Default Prometheus client buckets, in seconds.
const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Build a standalone Prometheus recorder.
///
/// The recorder is not installed globally; callers scope it with
/// `metrics::with_local_recorder`.
pub fn build_recorder() -> anyhow::Result<PrometheusRecorder> {
    let recorder = PrometheusBuilder::new()
        .set_buckets(DURATION_BUCKETS)?
        .build_recorder();

    Ok(recorder)
}

/// Register HELP text for the HTTP series. Must run with the recorder in scope.
pub fn describe_http_metrics() {
    describe_counter!(HTTP_REQUESTS_TOTAL, "Total HTTP Requests");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "HTTP Request Duration"
    );
}
