//! Deep-link resolution core.
//!
//! Turns raw deep-link URIs (custom scheme or universal-link form) into
//! in-app navigation, and keeps a bounded in-memory record of every
//! resolution attempt for diagnostics.
//!
//! # Architecture Overview
//!
//! ```text
//! raw URI string
//!     → link (parse, normalize, validate)
//!     → routing (first-match route table, auth requirement)
//!     → dispatch (handler execution against injected capabilities)
//!     → analytics (bounded attempt log, stats, report)
//!
//! Cross-cutting: config (scheme/domain/capacity), observability (tracing)
//! ```
//!
//! The crate has no network surface of its own; navigation, cache prefetch
//! and auth state are injected by the host through [`dispatch::HandlerContext`].

// Core subsystems
pub mod analytics;
pub mod dispatch;
pub mod link;
pub mod resolver;
pub mod routing;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use analytics::{AnalyticsRecorder, DeepLinkEvent, LinkSource};
pub use config::DeepLinkConfig;
pub use dispatch::{dispatch, HandlerContext, Navigator, PrefetchCache};
pub use link::{parse, ParsedDeepLink};
pub use resolver::DeepLinkResolver;
pub use routing::{HandlerKind, RouteTable};
