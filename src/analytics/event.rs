//! Attempt event model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The circumstance under which a link was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSource {
    /// App cold-launched via the link.
    Initial,
    /// Link received while the app was running.
    Foreground,
    /// Link received while backgrounded, now resumed.
    Background,
}

impl std::fmt::Display for LinkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LinkSource::Initial => "initial",
            LinkSource::Foreground => "foreground",
            LinkSource::Background => "background",
        })
    }
}

/// One recorded resolution attempt. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepLinkEvent {
    /// Instant of the attempt, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,

    /// The original raw link string.
    pub url: String,

    /// Normalized path, absent when parsing failed before one existed.
    pub path: Option<String>,

    /// Query parameters as parsed.
    #[serde(default)]
    pub query_params: BTreeMap<String, String>,

    /// Matched handler name, if any.
    pub handler: Option<String>,

    /// Whether the link resolved to a route.
    pub is_valid: bool,

    /// Failure reason for invalid attempts.
    pub error_message: Option<String>,

    /// Wall-clock duration of the navigation, when the caller measured one.
    pub navigation_time_ms: Option<u64>,

    /// How the link arrived.
    pub source: LinkSource,
}
