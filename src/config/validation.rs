//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses well-formed)
//! - Check the upstream base URL parses and uses http(s)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address `{0}`: expected host:port")]
    BindAddress(String),

    #[error("invalid upstream base URL `{0}`")]
    BaseUrl(String),

    #[error("upstream base URL must use http or https, got `{0}`")]
    BaseUrlScheme(String),

    #[error("upstream api_version must not be empty")]
    EmptyApiVersion,

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("invalid metrics address `{0}`")]
    MetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !has_valid_port(&config.listener.bind_address) {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::BaseUrlScheme(url.scheme().to_string())),
        Err(_) => errors.push(ValidationError::BaseUrl(config.upstream.base_url.clone())),
    }

    if config.upstream.api_version.is_empty() {
        errors.push(ValidationError::EmptyApiVersion);
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A bind address may use a hostname, so only the port is checked strictly.
fn has_valid_port(address: &str) -> bool {
    matches!(address.rsplit_once(':'), Some((host, port))
        if !host.is_empty() && port.parse::<u16>().is_ok())
}
