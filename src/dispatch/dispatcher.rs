//! Handler lookup and the dispatch failure boundary.
//!
//! # Responsibilities
//! - Map a handler name to its `HandlerKind`
//! - Run the handler, containing every failure mode
//!
//! # Design Decisions
//! - Unknown handler names return false with zero side effects: that is a
//!   registration bug, not a link-content problem
//! - Errors and panics from injected capabilities become a false result;
//!   no exception channel crosses this boundary
//! - Each dispatch call is independent; concurrent calls are not serialized
//!   and there is no cancellation once a handler starts

use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use thiserror::Error;

use crate::dispatch::context::{HandlerContext, PrefetchError};
use crate::dispatch::handlers;
use crate::link::ParsedDeepLink;
use crate::routing::HandlerKind;

/// Failures a handler can surface to the dispatch boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Prefetch(#[from] PrefetchError),
}

/// Look up `handler_name` and run its handler for the link.
///
/// Returns true when the link was fully handled. Unknown names, handler
/// errors, and handler panics all yield false; this function never panics
/// and never returns an error.
pub async fn dispatch(link: &ParsedDeepLink, handler_name: &str, ctx: &HandlerContext) -> bool {
    let Some(kind) = HandlerKind::from_name(handler_name) else {
        tracing::warn!(handler = handler_name, "dispatch requested for unknown handler");
        return false;
    };

    let outcome = AssertUnwindSafe(handlers::run(kind, link, ctx))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(handled)) => {
            tracing::debug!(handler = %kind, handled, path = %link.path, "dispatch complete");
            handled
        }
        Ok(Err(e)) => {
            tracing::warn!(handler = %kind, error = %e, "handler failed");
            false
        }
        Err(_) => {
            tracing::error!(handler = %kind, "handler panicked");
            false
        }
    }
}
