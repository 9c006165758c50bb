//! Raw URI string → structured link descriptor.
//!
//! # Responsibilities
//! - Decompose scheme, host, path and query via the `url` crate
//! - Normalize the path and percent-decode query values
//! - Attach a route match verdict (valid, or one fixed failure reason)
//!
//! # Design Decisions
//! - Never returns Err and never panics: malformed input yields an invalid
//!   descriptor carrying the reason
//! - Custom-scheme authorities are part of the in-app path: `acp://sessions/x`
//!   means `/sessions/x`, not host "sessions"
//! - Query duplicates resolve last-wins

use std::collections::BTreeMap;

use thiserror::Error;
use url::Url;

use crate::link::normalize::normalize_path;
use crate::routing::RouteTable;

/// Why a link failed to resolve to a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The raw string could not be decomposed into URI components.
    #[error("malformed link: {0}")]
    Malformed(String),

    /// Scheme present but nothing routable after the authority.
    #[error("missing path")]
    MissingPath,

    /// The normalized path matched no route definition.
    #[error("Unsupported route: {0}")]
    UnsupportedRoute(String),

    /// The matched route's parameter validator rejected the parameters.
    #[error("Invalid query parameters")]
    InvalidParams,
}

/// Structured, validated representation of one deep link.
///
/// Created fresh on every [`parse`] call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDeepLink {
    /// URI scheme (`acp`, `https`, ...).
    pub scheme: String,

    /// Host, present only for universal-link (web) forms.
    pub hostname: Option<String>,

    /// Normalized path: one leading `/`, no trailing `/` except root,
    /// no `//` runs.
    pub path: String,

    /// Percent-decoded query parameters, last key wins.
    pub query_params: BTreeMap<String, String>,

    /// Failure reason, absent when the link resolved to a route.
    pub error: Option<LinkError>,
}

impl ParsedDeepLink {
    /// True when the path matched a route and its validator accepted the
    /// parameters.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable failure reason, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    fn invalid(scheme: String, hostname: Option<String>, path: String, error: LinkError) -> Self {
        Self {
            scheme,
            hostname,
            path,
            query_params: BTreeMap::new(),
            error: Some(error),
        }
    }
}

/// Parse a raw deep-link string against the given route table.
///
/// Accepts both the custom-scheme form (`acp://sessions/x?tab=logs`) and the
/// universal-link form (`https://domain/sessions/x`). All failures are folded
/// into the returned descriptor; this function has no error channel.
pub fn parse(raw: &str, table: &RouteTable) -> ParsedDeepLink {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            return ParsedDeepLink::invalid(
                String::new(),
                None,
                String::new(),
                LinkError::Malformed(e.to_string()),
            );
        }
    };

    let scheme = url.scheme().to_string();
    let web_form = scheme == "http" || scheme == "https";
    let hostname = if web_form {
        url.host_str().map(str::to_string)
    } else {
        None
    };

    // For custom schemes the authority is the first in-app path segment.
    let raw_path = if web_form {
        url.path().to_string()
    } else {
        match url.host_str() {
            Some(host) if !host.is_empty() => format!("/{}{}", host, url.path()),
            _ => url.path().to_string(),
        }
    };

    if raw_path.chars().all(|c| c == '/') {
        return ParsedDeepLink::invalid(scheme, hostname, String::new(), LinkError::MissingPath);
    }

    let path = normalize_path(&raw_path);

    let mut query_params = BTreeMap::new();
    for (key, value) in url.query_pairs() {
        query_params.insert(key.into_owned(), value.into_owned());
    }

    let Some(route) = table.match_route(&path) else {
        tracing::debug!(%path, "no route for deep link");
        return ParsedDeepLink::invalid(
            scheme,
            hostname,
            path.clone(),
            LinkError::UnsupportedRoute(path),
        );
    };

    if let Some(validator) = route.param_validator {
        // Path captures merged over the query map; captures win.
        let mut params = query_params.clone();
        params.extend(route.pattern.extract(&path));
        if !validator(&params) {
            return ParsedDeepLink::invalid(scheme, hostname, path, LinkError::InvalidParams);
        }
    }

    ParsedDeepLink {
        scheme,
        hostname,
        path,
        query_params,
        error: None,
    }
}
