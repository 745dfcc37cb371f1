//! Outbound HTTP client with timeout and body bounds.
//!
//! # Responsibilities
//! - Issue GET requests to the upstream site
//! - Apply the total request timeout (connect, headers and body)
//! - Read bodies up to a byte ceiling for the rewritten routes
//! - Hand back the raw response for streaming on the forward route

use axum::body::Bytes;
use futures_util::StreamExt;

use crate::config::UpstreamConfig;
use crate::error::GatewayError;

/// Shared upstream client. Cheap to clone, safe to use from many handlers.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    inner: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client with the configured total timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }
        let inner = builder.build().map_err(GatewayError::ClientSetup)?;

        tracing::debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "Upstream client initialized"
        );

        Ok(Self { inner })
    }

    /// GET `url`. Any status is returned as-is; only transport failures error.
    pub async fn fetch(&self, url: &str) -> Result<reqwest::Response, GatewayError> {
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(GatewayError::UpstreamTransport)?;

        tracing::debug!(url = %url, status = %response.status(), "Upstream responded");
        Ok(response)
    }
}

/// Read at most `limit` bytes of the body; the remainder is never pulled.
pub async fn read_bounded(response: reqwest::Response, limit: usize) -> Result<Bytes, GatewayError> {
    let mut stream = response.bytes_stream();
    let mut body = Vec::with_capacity(limit.min(64 * 1024));

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(GatewayError::UpstreamBody)?;
        let room = limit - body.len();
        if chunk.len() >= room {
            body.extend_from_slice(&chunk[..room]);
            tracing::debug!(limit, "Upstream body truncated at limit");
            break;
        }
        body.extend_from_slice(&chunk);
    }

    Ok(Bytes::from(body))
}
