//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the resolver.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the deep-link resolver.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeepLinkConfig {
    /// Custom URI scheme for development links (e.g. "acp").
    pub scheme: String,

    /// Verified web domain for universal links.
    pub universal_domain: String,

    /// Which link form [`crate::link::build_link`] produces.
    pub environment: Environment,

    /// Analytics recorder settings.
    pub analytics: AnalyticsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            scheme: "acp".to_string(),
            universal_domain: "app.example.com".to_string(),
            environment: Environment::Development,
            analytics: AnalyticsConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Build environment, selecting the outbound link form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Analytics recorder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Maximum retained events; oldest are evicted first.
    pub event_capacity: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            event_capacity: 100,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
