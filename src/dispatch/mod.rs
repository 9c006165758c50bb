//! Handler dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! (ParsedDeepLink, handler name, HandlerContext)
//!     → dispatcher.rs (name → HandlerKind, failure boundary)
//!     → handlers.rs (one exhaustive match, one async fn per route family)
//!     → injected capabilities: Navigator (push/replace),
//!       PrefetchCache (best-effort warm-up), auth flag
//!     → bool outcome (true = fully handled, false = degraded or failed)
//! ```
//!
//! # Design Decisions
//! - Handlers are a closed set; adding a route is a compile-time change
//! - The dispatcher never propagates errors or panics to its caller: handlers
//!   perform I/O (prefetch) that can fail in ways unrelated to link validity
//! - Prefetch failures never block navigation
//! - No recording here: analytics is the dispatching caller's responsibility

pub mod context;
pub mod dispatcher;
pub mod handlers;

pub use context::{HandlerContext, Navigator, PrefetchCache, PrefetchError, PrefetchFuture};
pub use dispatcher::{dispatch, DispatchError};
