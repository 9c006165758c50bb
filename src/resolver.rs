//! Top-level resolution service: parse → gate → dispatch → record.
//!
//! # Responsibilities
//! - Run the full pipeline for one raw link
//! - Apply the app-level auth gate (fail-closed) before dispatching
//! - Record every attempt, successful or not, into analytics
//!
//! # Design Decisions
//! - The dispatcher itself never records; this caller owns that contract
//! - Failures with no usable descriptor (malformed, missing path) go through
//!   the validation-failure channel; failures with a parsed path keep their
//!   descriptor fields in the event
//! - Concurrent resolve calls are independent; nothing is serialized here

use std::sync::Arc;
use std::time::Instant;

use crate::analytics::{AnalyticsRecorder, LinkSource};
use crate::dispatch::{dispatch, HandlerContext};
use crate::link::{parse, LinkError};
use crate::routing::RouteTable;

/// Resolves raw deep links end to end against injected capabilities.
pub struct DeepLinkResolver {
    table: RouteTable,
    analytics: Arc<AnalyticsRecorder>,
    context: HandlerContext,
}

impl DeepLinkResolver {
    pub fn new(
        table: RouteTable,
        analytics: Arc<AnalyticsRecorder>,
        context: HandlerContext,
    ) -> Self {
        Self {
            table,
            analytics,
            context,
        }
    }

    /// Resolve one raw link, recording the attempt.
    ///
    /// Returns true only when a handler ran and reported the link fully
    /// handled.
    pub async fn resolve(&self, raw_url: &str, source: LinkSource) -> bool {
        let started = Instant::now();
        let link = parse(raw_url, &self.table);

        match &link.error {
            Some(e @ (LinkError::Malformed(_) | LinkError::MissingPath)) => {
                tracing::warn!(url = raw_url, error = %e, "deep link rejected before routing");
                self.analytics
                    .track_validation_failure(raw_url, &e.to_string(), source);
                return false;
            }
            Some(e) => {
                tracing::warn!(url = raw_url, path = %link.path, error = %e, "deep link invalid");
                self.analytics
                    .track_navigation(raw_url, &link, None, source, None);
                return false;
            }
            None => {}
        }

        let handler = self.table.handler_name_for(&link.path);

        if self.table.requires_auth(&link.path) && !self.context.is_authenticated {
            tracing::info!(path = %link.path, "deep link deferred: authentication required");
            self.analytics
                .track_navigation(raw_url, &link, handler, source, None);
            return false;
        }

        let Some(handler) = handler else {
            // A valid descriptor always has a matching route; treat anything
            // else as a table bug rather than panicking.
            tracing::error!(path = %link.path, "valid link with no handler name");
            self.analytics
                .track_navigation(raw_url, &link, None, source, None);
            return false;
        };

        let handled = dispatch(&link, handler, &self.context).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        self.analytics
            .track_navigation(raw_url, &link, Some(handler), source, Some(elapsed_ms));

        handled
    }

    /// Whether navigation to `path` requires authentication (fail-closed).
    pub fn requires_auth(&self, path: &str) -> bool {
        self.table.requires_auth(path)
    }

    /// The recorder backing this resolver.
    pub fn analytics(&self) -> &AnalyticsRecorder {
        &self.analytics
    }

    /// The route table backing this resolver.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}
