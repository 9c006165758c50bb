//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DeepLinkConfig (validated, immutable)
//!     → shared with the resolver / link builder
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so an empty config file is valid
//! - Validation separates syntactic (serde) from semantic checks and reports
//!   every violation, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AnalyticsConfig, DeepLinkConfig, Environment, ObservabilityConfig};
