//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the server (upstream client, rewrite rules) from configuration
//! - Bind the listener
//! - Wire OS signals to graceful shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};

/// Run the gateway until a termination signal and a completed drain.
pub async fn run(config: GatewayConfig) -> Result<(), GatewayError> {
    let bind_address = config.bind_address();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        tracing::error!(address = %bind_address, error = %e, "listen failed");
        e
    })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_listener(shutdown);

    server.run(listener, server_shutdown).await
}
