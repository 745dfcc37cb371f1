//! Route handlers.
//!
//! `/` and `/news/{newsid}` fetch a page, rewrite it and answer with HTML.
//! `/forward/{*rest}` streams an upstream resource back unchanged.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{StatusCode, Uri},
    response::Response,
};

use crate::error::GatewayError;
use crate::http::response::{html_response, passthrough_response};
use crate::http::server::AppState;
use crate::rewrite::inject_disclaimer;
use crate::routing::Route;
use crate::upstream::read_bounded;

/// `GET /`
pub async fn index(State(state): State<AppState>, uri: Uri) -> Result<Response, GatewayError> {
    tracing::info!(uri = %uri, "Remapping");
    news_page(&state, Route::Index).await
}

/// `GET /news/{newsid}`
pub async fn news(
    State(state): State<AppState>,
    newsid: Result<Path<String>, PathRejection>,
    uri: Uri,
) -> Result<Response, GatewayError> {
    tracing::info!(uri = %uri, "Remapping");
    let Path(newsid) = newsid.map_err(|e| GatewayError::BadPathParam(e.body_text()))?;
    state.limits.check_news_id(&newsid)?;
    news_page(&state, Route::News { id: newsid }).await
}

/// `GET /forward/{*rest}`
pub async fn forward(State(state): State<AppState>, uri: Uri) -> Result<Response, GatewayError> {
    tracing::info!(uri = %uri, "Forwarding");
    let route = Route::forward(uri.path());
    let url = route.upstream_url(&state.config.upstream);

    let response = state.upstream.fetch(&url).await?;
    if response.status() != StatusCode::OK {
        // body is still streamed, the client sees whatever upstream sent
        tracing::warn!(url = %url, status = %response.status(), "Unexpected upstream status");
    }

    Ok(passthrough_response(response))
}

async fn news_page(state: &AppState, route: Route) -> Result<Response, GatewayError> {
    let url = route.upstream_url(&state.config.upstream);
    let response = state.upstream.fetch(&url).await?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!(url = %url, status = %status, "Unexpected upstream status");
        return Err(GatewayError::UpstreamStatus {
            status,
            policy: state.config.upstream.non_ok_policy,
        });
    }

    let body = read_bounded(response, state.config.upstream.max_body_bytes).await?;
    let mut page = state.rules.apply(&String::from_utf8_lossy(&body));
    if route.has_disclaimer() {
        page = inject_disclaimer(&page);
    }

    tracing::debug!(
        route = route.name(),
        upstream_bytes = body.len(),
        page_bytes = page.len(),
        "Page rewritten"
    );
    Ok(html_response(page))
}
