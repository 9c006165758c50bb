//! Analytics subsystem.
//!
//! # Data Flow
//! ```text
//! Every resolution attempt (valid or not)
//!     → event.rs (immutable DeepLinkEvent)
//!     → recorder.rs (bounded FIFO buffer, capacity default 100)
//!
//! Consumers:
//!     → snapshot queries (events, valid, failed)
//!     → stats() (aggregate counts, average navigation time)
//!     → generate_report() (human-readable debug summary)
//! ```
//!
//! # Design Decisions
//! - Explicit constructed recorder, no global singleton; lifecycle belongs to
//!   the host's startup sequence
//! - Memory-only: nothing survives process restart
//! - Append and FIFO eviction happen under one lock so the capacity invariant
//!   holds under concurrent use
//! - Handlers never record; the dispatching caller does

pub mod event;
pub mod recorder;

pub use event::{DeepLinkEvent, LinkSource};
pub use recorder::{AnalyticsRecorder, AnalyticsStats, DEFAULT_EVENT_CAPACITY};
