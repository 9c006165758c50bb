//! Outbound link construction.
//!
//! The inverse of parsing: given an in-app path and optional query map,
//! produce the externally shareable string. Development builds use the
//! custom scheme (routable without domain verification); everything else
//! uses the universal-link form.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::config::{DeepLinkConfig, Environment};
use crate::link::normalize::normalize_path;

/// Build a shareable deep link for the given in-app path.
///
/// The path is normalized first, so callers may pass unpolished input.
pub fn build_link(config: &DeepLinkConfig, path: &str, query: &BTreeMap<String, String>) -> String {
    let path = normalize_path(path);

    let mut link = match config.environment {
        Environment::Development => {
            format!("{}://{}", config.scheme, path.trim_start_matches('/'))
        }
        Environment::Production => format!("https://{}{}", config.universal_domain, path),
    };

    if !query.is_empty() {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in query {
            serializer.append_pair(key, value);
        }
        link.push('?');
        link.push_str(&serializer.finish());
    }

    link
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_config() -> DeepLinkConfig {
        DeepLinkConfig {
            environment: Environment::Development,
            ..DeepLinkConfig::default()
        }
    }

    fn prod_config() -> DeepLinkConfig {
        DeepLinkConfig {
            environment: Environment::Production,
            ..DeepLinkConfig::default()
        }
    }

    #[test]
    fn test_development_uses_custom_scheme() {
        let link = build_link(&dev_config(), "/sessions/abc123", &BTreeMap::new());
        assert_eq!(link, "acp://sessions/abc123");
    }

    #[test]
    fn test_production_uses_universal_form() {
        let link = build_link(&prod_config(), "/sessions/abc123", &BTreeMap::new());
        assert_eq!(link, "https://app.example.com/sessions/abc123");
    }

    #[test]
    fn test_query_is_encoded() {
        let mut query = BTreeMap::new();
        query.insert("tab".to_string(), "logs".to_string());
        query.insert("q".to_string(), "hello world".to_string());
        let link = build_link(&dev_config(), "/sessions/abc123", &query);
        assert_eq!(link, "acp://sessions/abc123?q=hello+world&tab=logs");
    }

    #[test]
    fn test_input_path_is_normalized() {
        let link = build_link(&dev_config(), "sessions//abc123/", &BTreeMap::new());
        assert_eq!(link, "acp://sessions/abc123");
    }

    #[test]
    fn test_built_links_parse_back() {
        use crate::link::parser::parse;
        use crate::routing::RouteTable;

        let table = RouteTable::with_default_routes();
        for config in [dev_config(), prod_config()] {
            let link = build_link(&config, "/sessions/abc123", &BTreeMap::new());
            assert!(parse(&link, &table).is_valid(), "failed for {link}");
        }
    }
}
