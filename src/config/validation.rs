//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (capacity ≥ 1, known log level)
//! - Catch scheme/domain values that would produce unparseable links
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: DeepLinkConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::DeepLinkConfig;

/// One semantic violation in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("scheme must not be empty")]
    EmptyScheme,

    #[error("scheme '{0}' is not a valid URI scheme")]
    InvalidScheme(String),

    #[error("universal_domain must not be empty")]
    EmptyDomain,

    #[error("universal_domain '{0}' must be a bare host, without scheme or path")]
    InvalidDomain(String),

    #[error("analytics.event_capacity must be at least 1")]
    ZeroEventCapacity,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check every semantic rule, collecting all violations.
pub fn validate_config(config: &DeepLinkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.scheme.is_empty() {
        errors.push(ValidationError::EmptyScheme);
    } else if !is_valid_scheme(&config.scheme) {
        errors.push(ValidationError::InvalidScheme(config.scheme.clone()));
    }

    if config.universal_domain.is_empty() {
        errors.push(ValidationError::EmptyDomain);
    } else if config.universal_domain.contains('/') || config.universal_domain.contains("://") {
        errors.push(ValidationError::InvalidDomain(
            config.universal_domain.clone(),
        ));
    }

    if config.analytics.event_capacity == 0 {
        errors.push(ValidationError::ZeroEventCapacity);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// RFC 3986 scheme: one ASCII letter, then letters, digits, `+`, `-`, `.`.
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DeepLinkConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DeepLinkConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DeepLinkConfig::default();
        config.scheme = String::new();
        config.universal_domain = String::new();
        config.analytics.event_capacity = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyScheme));
        assert!(errors.contains(&ValidationError::ZeroEventCapacity));
    }

    #[test]
    fn test_rejects_bad_scheme_and_domain() {
        let mut config = DeepLinkConfig::default();
        config.scheme = "9acp".to_string();
        config.universal_domain = "https://app.example.com".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidScheme(_))));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidDomain(_))));
    }
}
