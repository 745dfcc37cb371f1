//! Response construction.
//!
//! # Responsibilities
//! - Wrap rewritten pages as HTML responses
//! - Stream forwarded upstream bodies to the client untouched
//!
//! # Design Decisions
//! - Forwarded bodies are never buffered or bounded
//! - Only the upstream `Content-Type` is carried over; status is always 200

use axum::{
    body::Body,
    http::header,
    response::{IntoResponse, Response},
};

/// 200 response carrying a rewritten page.
pub fn html_response(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    )
        .into_response()
}

/// 200 response streaming the upstream body as it arrives.
pub fn passthrough_response(upstream: reqwest::Response) -> Response {
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}
