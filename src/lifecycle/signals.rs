//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl+C) or SIGTERM
//! - Translate the first one into a shutdown trigger

use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;

/// Resolve once a termination signal arrives, naming it.
#[cfg(unix)]
pub async fn termination() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result.map(|_| "SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
pub async fn termination() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|_| "ctrl-c")
}

/// Spawn a task that triggers `shutdown` on the first termination signal.
pub fn spawn_listener(shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        match termination().await {
            Ok(signal) => tracing::info!(signal, "Shutdown signal received"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                return;
            }
        }
        shutdown.trigger();
    })
}
