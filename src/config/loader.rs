//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::DeepLinkConfig;
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

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DeepLinkConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: DeepLinkConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        scheme = %config.scheme,
        universal_domain = %config.universal_domain,
        event_capacity = config.analytics.event_capacity,
        "Configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_lists_all() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyScheme,
            ValidationError::ZeroEventCapacity,
        ]);
        let text = err.to_string();
        assert!(text.contains("scheme must not be empty"));
        assert!(text.contains("event_capacity"));
    }
}
