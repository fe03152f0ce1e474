// Test helpers are intentionally partially used
#![allow(dead_code)]

use devops_api::{create_router_with, AppConfig, MetricsType};
use reqwest::Client;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

// ============================================================================
// Test Setup
// ============================================================================

pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    /// Start a server with Prometheus metrics and an empty store.
    pub async fn new() -> Self {
        // ---
        Self::with_metrics(MetricsType::Prometheus).await
    }

    pub async fn with_metrics(metrics_type: MetricsType) -> Self {
        // --

        // Enable debug logging only when requested
        if std::env::var("TEST_DEBUG").is_ok() {
            devops_api::init_tracing(devops_api::LogFormat::Pretty);
        }

        let config = AppConfig {
            metrics_type,
            ..AppConfig::default()
        };
        let app = create_router_with(&config).expect("Should be able to create router");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}

/// Returns the `X-Request-ID` header, failing the test if it is absent or empty.
pub fn request_id(response: &reqwest::Response) -> String {
    // ---
    let value = response
        .headers()
        .get("x-request-id")
        .expect("X-Request-ID header missing")
        .to_str()
        .expect("X-Request-ID is not ASCII")
        .to_string();
    assert!(!value.is_empty(), "X-Request-ID must not be empty");
    value
}
