//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the three gateway routes
//! - Wire up middleware (request ID, tracing, timeout, URI limit)
//! - Bind server to listener
//! - Graceful shutdown with a hard deadline

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Notify};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::rewrite::RewriteRules;
use crate::security::{uri_limit_middleware, RequestLimits};
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub rules: Arc<RewriteRules>,
    pub upstream: UpstreamClient,
    pub limits: RequestLimits,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        let rules = RewriteRules::consensus_layer(&config.site);
        let limits = RequestLimits::from(&config.limits);

        tracing::debug!(rules = rules.rules().len(), "Rewrite rules compiled");

        Ok(Self {
            config: Arc::new(config),
            rules: Arc::new(rules),
            upstream,
            limits,
        })
    }
}

/// HTTP server for the news gateway.
pub struct HttpServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let state = AppState::new(config)?;
        let config = state.config.clone();
        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(state: AppState) -> Router {
        let request_timeout = Duration::from_secs(state.config.listener.request_timeout_secs);
        let limits = state.limits;

        Router::new()
            .route("/", get(handlers::index))
            .route("/news/{newsid}", get(handlers::news))
            .route("/forward/", get(handlers::forward))
            .route("/forward/{*rest}", get(handlers::forward))
            .with_state(state)
            .layer(middleware::from_fn_with_state(limits, uri_limit_middleware))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id(request.headers()),
                        )
                    }))
                    .layer(propagate_request_id_layer())
                    .layer(TimeoutLayer::new(request_timeout)),
            )
    }

    /// Run the server until `shutdown` fires, then drain for at most the
    /// configured grace period.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), GatewayError> {
        let addr = listener.local_addr()?;
        let grace = self.config.shutdown.grace();
        tracing::info!(address = %addr, "Server started");

        let draining = Arc::new(Notify::new());
        let notify = draining.clone();

        let server = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!(grace_secs = grace.as_secs(), "Server stopped");
                notify.notify_one();
            })
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => result?,
            _ = draining.notified() => {
                match tokio::time::timeout(grace, &mut server).await {
                    Ok(result) => result?,
                    Err(_) => {
                        tracing::error!(grace_secs = grace.as_secs(), "Server shutdown failed: in-flight requests still running");
                        return Err(GatewayError::ShutdownTimeout(grace));
                    }
                }
            }
        }

        tracing::info!("Server exited");
        Ok(())
    }
}
