use clap::Parser;

use consensus_layer_news::config::{loader, CliArgs};
use consensus_layer_news::lifecycle::startup;
use consensus_layer_news::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config = loader::resolve(&args)?;

    logging::init(&config.logging);

    tracing::info!("consensus-layer-news v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.bind_address(),
        self_url = %config.site.self_url,
        domain = %config.site.domain,
        upstream = %config.upstream.base_url,
        non_ok_policy = ?config.upstream.non_ok_policy,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
