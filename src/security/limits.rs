//! Request input limits.
//!
//! # Responsibilities
//! - Enforce maximum request URI length on every route
//! - Enforce maximum news identifier length on `/news/{id}`
//! - Keep a decoded news identifier inside a single upstream path segment
//!
//! # Design Decisions
//! - Limits checked before any upstream contact (early rejection)
//! - URI length is measured on the request target exactly as received
//! - Oversized URI → 400, oversized identifier → 500, both with empty bodies
//! - An identifier holding a path separator never matched the route → 404

use axum::{
    body::Body,
    extract::State,
    http::{Request, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::LimitsConfig;
use crate::error::GatewayError;

/// Immutable copy of the configured limits, cheap to pass as middleware state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    pub max_uri_len: usize,
    pub max_news_id_len: usize,
}

impl From<&LimitsConfig> for RequestLimits {
    fn from(config: &LimitsConfig) -> Self {
        Self {
            max_uri_len: config.max_uri_len,
            max_news_id_len: config.max_news_id_len,
        }
    }
}

impl RequestLimits {
    pub fn check_uri(&self, uri: &Uri) -> Result<(), GatewayError> {
        let len = request_target_len(uri);
        if len > self.max_uri_len {
            return Err(GatewayError::UriTooLong(len));
        }
        Ok(())
    }

    pub fn check_news_id(&self, id: &str) -> Result<(), GatewayError> {
        // `\` is a separator too once the url crate parses an http URL
        if id.contains(|c: char| c == '/' || c == '\\') {
            return Err(GatewayError::NewsIdNotSegment(id.to_string()));
        }
        if id.len() > self.max_news_id_len {
            return Err(GatewayError::NewsIdTooLong(id.len()));
        }
        Ok(())
    }
}

/// Length of the request target: path and query for origin-form requests,
/// the whole URI for absolute-form ones.
pub fn request_target_len(uri: &Uri) -> usize {
    match (uri.scheme(), uri.path_and_query()) {
        (None, Some(pq)) => pq.as_str().len(),
        _ => uri.to_string().len(),
    }
}

/// Middleware rejecting oversized URIs before any handler runs.
pub async fn uri_limit_middleware(
    State(limits): State<RequestLimits>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if let Err(e) = limits.check_uri(request.uri()) {
        tracing::warn!(
            uri_len = request_target_len(request.uri()),
            max = limits.max_uri_len,
            "URL too long"
        );
        return e.into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> RequestLimits {
        RequestLimits::from(&LimitsConfig::default())
    }

    #[test]
    fn test_uri_at_limit_passes() {
        let path = format!("/forward/{}", "a".repeat(1000 - "/forward/".len()));
        let uri: Uri = path.parse().unwrap();
        assert_eq!(request_target_len(&uri), 1000);
        assert!(limits().check_uri(&uri).is_ok());
    }

    #[test]
    fn test_uri_over_limit_fails() {
        let path = format!("/?q={}", "a".repeat(1000));
        let uri: Uri = path.parse().unwrap();
        assert!(matches!(
            limits().check_uri(&uri),
            Err(GatewayError::UriTooLong(1004))
        ));
    }

    #[test]
    fn test_query_counts_towards_length() {
        let uri: Uri = "/news/1?x=yz".parse().unwrap();
        assert_eq!(request_target_len(&uri), 12);
    }

    #[test]
    fn test_absolute_form_counts_whole_uri() {
        let uri: Uri = "http://example.com/news/1".parse().unwrap();
        assert_eq!(request_target_len(&uri), "http://example.com/news/1".len());
    }

    #[test]
    fn test_news_id_limit() {
        assert!(limits().check_news_id(&"1".repeat(100)).is_ok());
        assert!(matches!(
            limits().check_news_id(&"1".repeat(101)),
            Err(GatewayError::NewsIdTooLong(101))
        ));
    }

    #[test]
    fn test_news_id_with_separator_is_not_found() {
        for id in ["x/../../someone/note", "x\\..\\note", "/"] {
            assert!(matches!(
                limits().check_news_id(id),
                Err(GatewayError::NewsIdNotSegment(_))
            ));
        }
        assert!(limits().check_news_id("210423..").is_ok());
    }
}
