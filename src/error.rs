//! Gateway error types.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::NonOkPolicy;

/// Body sent when the upstream page could not be fetched.
pub const FETCH_FAILED_BODY: &str = "Failed to get news page";

/// Body sent when the upstream page could not be read to completion.
pub const READ_FAILED_BODY: &str = "Failed to read news page";

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("URI too long: {0} characters")]
    UriTooLong(usize),

    #[error("News identifier too long: {0} characters")]
    NewsIdTooLong(usize),

    #[error("News identifier spans path segments: {0:?}")]
    NewsIdNotSegment(String),

    #[error("Malformed path parameter: {0}")]
    BadPathParam(String),

    #[error("Upstream request failed: {0}")]
    UpstreamTransport(#[source] reqwest::Error),

    #[error("Reading upstream body failed: {0}")]
    UpstreamBody(#[source] reqwest::Error),

    #[error("Unexpected upstream status: {status}")]
    UpstreamStatus {
        status: StatusCode,
        policy: NonOkPolicy,
    },

    #[error("HTTP client setup failed: {0}")]
    ClientSetup(#[source] reqwest::Error),

    #[error("Shutdown did not complete within {0:?}")]
    ShutdownTimeout(std::time::Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UriTooLong(_) | Self::BadPathParam(_) => StatusCode::BAD_REQUEST,
            Self::NewsIdNotSegment(_) => StatusCode::NOT_FOUND,
            Self::UpstreamStatus { policy, .. } => match policy {
                NonOkPolicy::BadGateway => StatusCode::BAD_GATEWAY,
                NonOkPolicy::Preserve => StatusCode::OK,
            },
            Self::NewsIdTooLong(_)
            | Self::UpstreamTransport(_)
            | Self::UpstreamBody(_)
            | Self::ClientSetup(_)
            | Self::ShutdownTimeout(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Input errors and upstream status errors are bare.
    fn public_body(&self) -> &'static str {
        match self {
            Self::UpstreamTransport(_) => FETCH_FAILED_BODY,
            Self::UpstreamBody(_) => READ_FAILED_BODY,
            _ => "",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match status {
            s if s.is_server_error() => tracing::error!(error = %self, status = %s, "Request failed"),
            s => tracing::warn!(error = %self, status = %s, "Request rejected"),
        }

        let mut response = Response::new(Body::from(self.public_body()));
        *response.status_mut() = status;
        response
    }
}
