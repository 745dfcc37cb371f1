//! Route classification and upstream URL construction.

use crate::config::UpstreamConfig;

/// Literal path prefix of the passthrough route.
pub const FORWARD_PREFIX: &str = "/forward/";

/// What an incoming request asks the gateway to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /`: the default news page.
    Index,
    /// `GET /news/{id}`: a single issue.
    News { id: String },
    /// `GET /forward/{path}`: raw passthrough of an upstream resource.
    Forward { path: String },
}

impl Route {
    /// Build a forward route from the full request path.
    pub fn forward(request_path: &str) -> Self {
        let path = request_path
            .strip_prefix(FORWARD_PREFIX)
            .unwrap_or(request_path)
            .to_string();
        Route::Forward { path }
    }

    /// Route name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::News { .. } => "news",
            Route::Forward { .. } => "forward",
        }
    }

    /// Whether the disclaimer banner is injected.
    pub fn has_disclaimer(&self) -> bool {
        matches!(self, Route::News { .. })
    }

    /// Full upstream URL for this route.
    pub fn upstream_url(&self, upstream: &UpstreamConfig) -> String {
        let base = upstream.base_url.trim_end_matches('/');
        match self {
            Route::Index => format!("{}/{}", base, upstream.index_path),
            Route::News { id } => format!("{}/{}{}", base, upstream.news_prefix, id),
            Route::Forward { path } => format!("{}/{}", base, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_urls_with_defaults() {
        let upstream = UpstreamConfig::default();
        assert_eq!(
            Route::Index.upstream_url(&upstream),
            "https://hackmd.io/@benjaminion/eth2_news"
        );
        assert_eq!(
            Route::News { id: "210423".into() }.upstream_url(&upstream),
            "https://hackmd.io/@benjaminion/wnie2_210423"
        );
        assert_eq!(
            Route::forward("/forward/build/app.js").upstream_url(&upstream),
            "https://hackmd.io/build/app.js"
        );
    }

    #[test]
    fn test_forward_strips_prefix_only_once() {
        assert_eq!(
            Route::forward("/forward/forward/x"),
            Route::Forward { path: "forward/x".into() }
        );
        assert_eq!(Route::forward("/forward/"), Route::Forward { path: String::new() });
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let upstream = UpstreamConfig {
            base_url: "http://127.0.0.1:9000/".into(),
            ..Default::default()
        };
        assert_eq!(
            Route::forward("/forward/a/b").upstream_url(&upstream),
            "http://127.0.0.1:9000/a/b"
        );
    }

    #[test]
    fn test_route_behaviour_flags() {
        assert!(!Route::Index.has_disclaimer());
        assert!(Route::News { id: "1".into() }.has_disclaimer());
        assert_eq!(Route::forward("/forward/x").name(), "forward");
    }
}
