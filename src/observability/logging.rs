//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_level` applies when RUST_LOG is not set. Calling this twice
/// panics (the subscriber is global); hosts embedding the library should
/// install their own subscriber instead.
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("deeplink_router={default_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
