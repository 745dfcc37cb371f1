//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate URLs the rewrite rules and fetch client rely on
//! - Validate value ranges (timeouts > 0, ports valid, limits > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("listener.request_timeout_secs ({server}) must exceed upstream.timeout_secs ({upstream})")]
    TimeoutOrder { server: u64, upstream: u64 },
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url(&mut errors, "site.self_url", &config.site.self_url);
    check_url(&mut errors, "upstream.base_url", &config.upstream.base_url);

    if config.site.domain.trim().is_empty() {
        errors.push(ValidationError::Empty("site.domain"));
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::Zero("listener.port"));
    }
    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::Zero("upstream.timeout_secs"));
    }
    if config.upstream.max_body_bytes == 0 {
        errors.push(ValidationError::Zero("upstream.max_body_bytes"));
    }
    if config.limits.max_uri_len == 0 {
        errors.push(ValidationError::Zero("limits.max_uri_len"));
    }
    if config.limits.max_news_id_len == 0 {
        errors.push(ValidationError::Zero("limits.max_news_id_len"));
    }
    if config.listener.request_timeout_secs <= config.upstream.timeout_secs {
        errors.push(ValidationError::TimeoutOrder {
            server: config.listener.request_timeout_secs,
            upstream: config.upstream.timeout_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    let valid = Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false);
    if !valid {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GatewayConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.site.self_url = "localhost:5000".into();
        config.site.domain = " ".into();
        config.upstream.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::Empty("site.domain")));
        assert!(errors.contains(&ValidationError::Zero("upstream.timeout_secs")));
        assert!(matches!(
            errors[0],
            ValidationError::InvalidUrl { field: "site.self_url", .. }
        ));
    }

    #[test]
    fn test_server_timeout_must_cover_upstream_timeout() {
        let mut config = GatewayConfig::default();
        config.listener.request_timeout_secs = 15;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TimeoutOrder { server: 15, upstream: 15 }]
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = "ftp://hackmd.io".into();
        assert!(validate_config(&config).is_err());
    }
}
