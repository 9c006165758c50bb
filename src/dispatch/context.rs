//! Externally supplied capabilities handlers run against.
//!
//! The host owns navigation, data fetching and auth state; this crate only
//! consumes them through these seams. All traits are object-safe so tests can
//! substitute recording or failing implementations.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;

/// A prefetch (cache warm-up) that could not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("prefetch failed: {0}")]
pub struct PrefetchError(pub String);

/// Future returned by the prefetch capability.
pub type PrefetchFuture<'a> = BoxFuture<'a, Result<(), PrefetchError>>;

/// Navigation stack capability. Return values are not inspected.
pub trait Navigator: Send + Sync {
    /// Push the path onto the navigation stack.
    fn push(&self, path: &str);

    /// Replace the current location with the path.
    fn replace(&self, path: &str);
}

/// Cache warm-up capability.
///
/// The host curries its data loader into the implementation; handlers only
/// choose the key and inspect success/failure. No timeout is applied here:
/// a hung prefetch hangs the handler unless the host enforces its own bound.
pub trait PrefetchCache: Send + Sync {
    /// Warm the cache entry for `key`.
    fn prefetch(&self, key: &str) -> PrefetchFuture<'_>;
}

/// Capability bundle handed to every handler invocation.
#[derive(Clone)]
pub struct HandlerContext {
    pub navigator: Arc<dyn Navigator>,
    pub cache: Arc<dyn PrefetchCache>,

    /// Whether the current user is authenticated, read-only, supplied per
    /// dispatch call.
    pub is_authenticated: bool,
}

impl HandlerContext {
    pub fn new(
        navigator: Arc<dyn Navigator>,
        cache: Arc<dyn PrefetchCache>,
        is_authenticated: bool,
    ) -> Self {
        Self {
            navigator,
            cache,
            is_authenticated,
        }
    }
}
