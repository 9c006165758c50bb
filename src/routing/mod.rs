//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Normalized path ("/sessions/abc123")
//!     → table.rs (ordered route definitions)
//!     → pattern.rs (evaluate literal / capture / alternation patterns)
//!     → Return: matched RouteDefinition or None
//!
//! Companion lookups:
//!     requires_auth(path)    → bool (true when unmatched, fail-closed)
//!     handler_name_for(path) → Option<&'static str>
//!     pattern.extract(path)  → named capture map
//! ```
//!
//! # Design Decisions
//! - Route table built once at startup, immutable at runtime
//! - Patterns are a closed tagged set, no regex: matching is auditable and O(n)
//! - Deterministic: first match wins in declared order
//! - Handlers are a closed enum; the name↔variant mapping lives with the table

pub mod pattern;
pub mod table;
pub mod validators;

pub use pattern::RoutePattern;
pub use table::{HandlerKind, RouteDefinition, RouteTable};
pub use validators::{is_valid_notification_id, is_valid_session_id};
