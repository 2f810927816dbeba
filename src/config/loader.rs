//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

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

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration.
///
/// With no path, defaults are used. `HOST` and `PORT` environment variables
/// override the configured bind address either way, matching the deployment
/// convention of the original service.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let mut config: GatewayConfig = match path {
        Some(p) => toml::from_str(&fs::read_to_string(p)?)?,
        None => GatewayConfig::default(),
    };

    config.listener.bind_address = override_bind_address(
        &config.listener.bind_address,
        env::var("HOST").ok(),
        env::var("PORT").ok(),
    );

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply host/port overrides to a `host:port` bind address.
fn override_bind_address(current: &str, host: Option<String>, port: Option<String>) -> String {
    let (current_host, current_port) = match current.rsplit_once(':') {
        Some((h, p)) => (h, p),
        None => (current, ""),
    };
    format!(
        "{}:{}",
        host.unwrap_or_else(|| current_host.to_string()),
        port.unwrap_or_else(|| current_port.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_address() {
        assert_eq!(
            override_bind_address("0.0.0.0:8089", None, None),
            "0.0.0.0:8089"
        );
    }

    #[test]
    fn test_host_override() {
        assert_eq!(
            override_bind_address("0.0.0.0:8089", Some("127.0.0.1".into()), None),
            "127.0.0.1:8089"
        );
    }

    #[test]
    fn test_port_override() {
        assert_eq!(
            override_bind_address("0.0.0.0:8089", None, Some("8087".into())),
            "0.0.0.0:8087"
        );
    }

    #[test]
    fn test_both_overrides() {
        assert_eq!(
            override_bind_address("0.0.0.0:8089", Some("10.0.0.5".into()), Some("9000".into())),
            "10.0.0.5:9000"
        );
    }
}
