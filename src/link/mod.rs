//! Link parsing subsystem.
//!
//! # Data Flow
//! ```text
//! Raw URI string ("acp://sessions/abc?tab=logs")
//!     → parser.rs (scheme/host/path/query decomposition via `url`)
//!     → normalize.rs (canonical path form)
//!     → routing table (match + param validation, invoked by the parser)
//!     → ParsedDeepLink (immutable descriptor, valid or carrying the reason)
//!
//! Outbound:
//!     in-app path + query map
//!     → builder.rs (custom-scheme form in development, https form otherwise)
//! ```
//!
//! # Design Decisions
//! - Parsing never fails with Err: malformed input becomes an invalid
//!   descriptor with a reason, so callers have a single result shape
//! - Custom-scheme links fold the URI authority into the path
//!   (`acp://sessions/x` and `https://domain/sessions/x` resolve identically)
//! - Normalization is idempotent; the rest of the crate assumes canonical paths

pub mod builder;
pub mod normalize;
pub mod parser;

pub use builder::build_link;
pub use normalize::normalize_path;
pub use parser::{parse, LinkError, ParsedDeepLink};
