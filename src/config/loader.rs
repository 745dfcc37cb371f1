//! Configuration loading from disk and the command line.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command line flags. Anything given here overrides the config file.
#[derive(Debug, Default, Parser)]
#[command(name = "consensus-layer-news")]
#[command(about = "Rewriting proxy for the weekly eth2 news pages", long_about = None)]
pub struct CliArgs {
    /// Optional TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Externally visible base URL of this server
    #[arg(long = "self")]
    pub self_url: Option<String>,

    /// Domain shown in rewritten pages
    #[arg(long)]
    pub domain: Option<String>,

    /// Base URL pages are fetched from
    #[arg(long)]
    pub upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut GatewayConfig) {
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(self_url) = &self.self_url {
            config.site.self_url = self_url.clone();
        }
        if let Some(domain) = &self.domain {
            config.site.domain = domain.clone();
        }
        if let Some(upstream) = &self.upstream {
            config.upstream.base_url = upstream.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

/// Resolve the effective configuration: defaults, then file, then flags.
pub fn resolve(args: &CliArgs) -> Result<GatewayConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => GatewayConfig::default(),
    };
    args.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
