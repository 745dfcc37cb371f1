//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the news gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (port, host, server-side timeout).
    pub listener: ListenerConfig,

    /// Public identity of this gateway, used by the rewrite rules.
    pub site: SiteConfig,

    /// Where pages are fetched from and how the fetch is bounded.
    pub upstream: UpstreamConfig,

    /// Request input limits.
    pub limits: LimitsConfig,

    /// Graceful shutdown settings.
    pub shutdown: ShutdownConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Socket address string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listener.host, self.listener.port)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Upper bound for a whole request/response exchange, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 30,
        }
    }
}

/// How the gateway presents itself inside rewritten pages.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Externally visible base URL, used to build `/news/` links.
    pub self_url: String,

    /// Display domain substituted for the upstream's domain.
    pub domain: String,
}

impl SiteConfig {
    /// Base URL for rewritten news links, e.g. `http://localhost:5000/news/`.
    pub fn news_path(&self) -> String {
        format!("{}/news/", self.self_url.trim_end_matches('/'))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            self_url: "http://localhost:5000".to_string(),
            domain: "localhost".to_string(),
        }
    }
}

/// Upstream fetch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL every upstream path is appended to.
    pub base_url: String,

    /// Path of the default page served on `/`.
    pub index_path: String,

    /// Prefix the news identifier is appended to.
    pub news_prefix: String,

    /// Total timeout for an upstream request in seconds.
    pub timeout_secs: u64,

    /// Body read ceiling on rewritten routes.
    pub max_body_bytes: usize,

    /// What the client sees when upstream answers with a non-200 status.
    pub non_ok_policy: NonOkPolicy,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_env_proxy: bool,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://hackmd.io".to_string(),
            index_path: "@benjaminion/eth2_news".to_string(),
            news_prefix: "@benjaminion/wnie2_".to_string(),
            timeout_secs: 15,
            max_body_bytes: 1_000_000,
            non_ok_policy: NonOkPolicy::default(),
            use_env_proxy: true,
        }
    }
}

/// Response policy for a non-200 upstream status on the rewritten routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NonOkPolicy {
    /// Answer 502 with an empty body.
    #[default]
    BadGateway,
    /// Answer 200 with an empty body, as the handler simply stops.
    Preserve,
}

/// Request input limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum length of the request target (path and query).
    pub max_uri_len: usize,

    /// Maximum length of the `{newsid}` path segment.
    pub max_news_id_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_uri_len: 1000,
            max_news_id_len: 100,
        }
    }
}

/// Graceful shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// How long in-flight requests may run after the signal.
    pub grace_secs: u64,
}

impl ShutdownConfig {
    pub fn grace(&self) -> Duration {
        Duration::from_secs(self.grace_secs)
    }
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { grace_secs: 5 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
