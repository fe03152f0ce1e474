use devops_api::MetricsType;
use std::sync::Arc;

mod common;

// Every TestServer owns its own Prometheus registry, so these tests do not
// need to run serially.

#[tokio::test]
async fn metrics_endpoint_with_prometheus() {
    // ---
    let server = common::TestServer::new().await;

    // First, hit some endpoints to generate metrics
    let _ = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap();
    let _ = server
        .client
        .get(server.url("/api/items/7"))
        .send()
        .await
        .unwrap();

    // Now check the metrics endpoint
    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();

    // Check status before consuming the response
    assert!(
        res.status().is_success(),
        "Metrics endpoint should return success"
    );
    common::request_id(&res);

    let body = res.text().await.unwrap();

    assert!(body.contains("# TYPE http_requests_total counter"), "{body}");
    assert!(
        body.contains(r#"http_requests_total{method="GET",endpoint="/health",status="200"} 1"#),
        "{body}"
    );
    assert!(
        body.contains(r#"http_requests_total{method="GET",endpoint="/api/items/7",status="404"} 1"#),
        "{body}"
    );
    assert!(
        body.contains("# TYPE http_request_duration_seconds histogram"),
        "{body}"
    );
    assert!(
        body.contains(r#"http_request_duration_seconds_count{method="GET",endpoint="/health"} 1"#),
        "{body}"
    );
}

#[tokio::test]
async fn metrics_endpoint_with_noop() {
    // ---
    let server = common::TestServer::with_metrics(MetricsType::Noop).await;

    let _ = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap();

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();

    // Should still return success even with noop metrics
    assert!(
        res.status().is_success(),
        "Metrics endpoint should return success even with noop"
    );

    let body = res.text().await.unwrap();
    assert!(body.is_empty(), "Noop metrics should render nothing: '{body}'");
}

#[tokio::test]
async fn metrics_endpoint_survives_load() {
    // ---
    let server = Arc::new(common::TestServer::new().await);

    // Generate some load
    let futures = (0..20).map(|i| {
        let server = Arc::clone(&server);
        async move {
            let endpoint = match i % 3 {
                0 => "/health",
                1 => "/api/items",
                _ => "/metrics",
            };
            server.client.get(server.url(endpoint)).send().await
        }
    });

    let responses = futures::future::join_all(futures).await;

    // All requests should succeed
    for (i, response) in responses.into_iter().enumerate() {
        // ---
        let response = response.unwrap_or_else(|_| panic!("Request {i} should succeed"));
        assert!(
            response.status().is_success(),
            "Request {i} should return success"
        );
    }

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();
    // i % 3 == 0 for i in 0..20 gives 7 health checks
    assert!(
        body.contains(r#"http_requests_total{method="GET",endpoint="/health",status="200"} 7"#),
        "{body}"
    );
}

#[tokio::test]
async fn metrics_content_type_is_correct() {
    // ---
    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let content_type = res
        .headers()
        .get("content-type")
        .expect("content-type header missing")
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("text/plain"),
        "Content type should be Prometheus text: {content_type}"
    );
}
