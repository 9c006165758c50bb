//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (parse verdicts, dispatch outcomes, evictions)
//!
//! Consumers:
//!     → stdout via tracing-subscriber (CLI and host applications)
//! ```
//!
//! # Design Decisions
//! - Structured fields over interpolated strings
//! - Level from config, overridable through RUST_LOG
//! - Attempt-level diagnostics live in the analytics recorder, not here

pub mod logging;
