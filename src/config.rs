// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Every setting has a default, but a value that is present and cannot be
//! parsed is treated as a deployment error rather than silently replaced.

use anyhow::Result;
use std::net::SocketAddr;
use std::str::FromStr;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable and parses it.
///
/// # Behavior
/// - Missing variable: the provided default is used
/// - Present but unparseable: fails fast with a message naming the variable
macro_rules! env_parse_or {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        match std::env::var($key) {
            Ok(raw) => raw.parse::<$ty>().map_err(|err| {
                anyhow::anyhow!(concat!("Invalid configuration: ", $key, ": {}"), err)
            })?,
            Err(_) => $default,
        }
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails because of an
/// unparseable environment variable.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_invalid_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Invalid configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

/// Port the service listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 8080;

// ============================================================
// Public configuration facade
// ============================================================

/// Which metrics backend to wire into the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsType {
    /// Prometheus registry rendered by `GET /metrics`.
    Prometheus,
    /// Metrics disabled; `GET /metrics` returns an empty body.
    Noop,
}

impl FromStr for MetricsType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "prom" | "prometheus" => Ok(MetricsType::Prometheus),
            "noop" | "none" => Ok(MetricsType::Noop),
            other => Err(anyhow::anyhow!("unknown metrics type '{other}'")),
        }
    }
}

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable lines for local development.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(anyhow::anyhow!("unknown log format '{other}'")),
        }
    }
}

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to. Defaults to all interfaces, port 8080.
    pub bind_addr: SocketAddr,

    /// Metrics backend. Defaults to Prometheus.
    pub metrics_type: MetricsType,

    /// Log output format. Defaults to JSON.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            metrics_type: MetricsType::Prometheus,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any variable is present but invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        let defaults = Self::default();

        Ok(Self {
            bind_addr: env_parse_or!("DEVOPS_API_BIND_ADDR", SocketAddr, defaults.bind_addr),
            metrics_type: env_parse_or!(
                "DEVOPS_API_METRICS_TYPE",
                MetricsType,
                defaults.metrics_type
            ),
            log_format: env_parse_or!("DEVOPS_API_LOG_FORMAT", LogFormat, defaults.log_format),
        })
    }
}

// ============================================================
// Tests
// ============================================================
