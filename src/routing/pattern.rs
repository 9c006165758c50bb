//! Path pattern evaluation.
//!
//! # Responsibilities
//! - Match a full normalized path against one pattern (never a prefix)
//! - Extract named captures for dynamic segments
//!
//! # Design Decisions
//! - Closed set of pattern shapes instead of ad hoc regex: the whole matching
//!   contract is visible in one enum
//! - Dynamic segments accept identifier characters only (letters, digits,
//!   hyphen, underscore); anything else falls through to the next route

use std::collections::BTreeMap;

/// A path-matching rule with zero or one captured segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Whole-path literal, e.g. `/sessions`.
    Literal(&'static str),

    /// Literal prefix plus one captured identifier segment,
    /// e.g. `/sessions/{id}`.
    Capture {
        prefix: &'static str,
        param: &'static str,
    },

    /// Literal prefix plus one segment drawn from a fixed set,
    /// e.g. `/settings/{appearance|notifications|repos}`.
    OneOf {
        prefix: &'static str,
        param: &'static str,
        options: &'static [&'static str],
    },
}

impl RoutePattern {
    /// True when the pattern matches the full path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Literal(literal) => path == *literal,
            RoutePattern::Capture { prefix, .. } => {
                Self::trailing_segment(path, prefix).is_some_and(is_identifier_segment)
            }
            RoutePattern::OneOf { prefix, options, .. } => {
                Self::trailing_segment(path, prefix).is_some_and(|s| options.contains(&s))
            }
        }
    }

    /// Re-apply the pattern and return its named captures.
    ///
    /// Returns an empty map when the pattern does not match or captures
    /// nothing.
    pub fn extract(&self, path: &str) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        match self {
            RoutePattern::Literal(_) => {}
            RoutePattern::Capture { prefix, param } => {
                if let Some(segment) = Self::trailing_segment(path, prefix) {
                    if is_identifier_segment(segment) {
                        params.insert((*param).to_string(), segment.to_string());
                    }
                }
            }
            RoutePattern::OneOf {
                prefix,
                param,
                options,
            } => {
                if let Some(segment) = Self::trailing_segment(path, prefix) {
                    if options.contains(&segment) {
                        params.insert((*param).to_string(), segment.to_string());
                    }
                }
            }
        }
        params
    }

    /// The single segment after `prefix/`, or None when the shape differs.
    fn trailing_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
        let rest = path.strip_prefix(prefix)?.strip_prefix('/')?;
        if rest.is_empty() || rest.contains('/') {
            return None;
        }
        Some(rest)
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutePattern::Literal(literal) => f.write_str(literal),
            RoutePattern::Capture { prefix, param } => write!(f, "{prefix}/{{{param}}}"),
            RoutePattern::OneOf {
                prefix, options, ..
            } => write!(f, "{prefix}/{{{}}}", options.join("|")),
        }
    }
}

/// Identifier segments: letters, digits, hyphen, underscore.
fn is_identifier_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
