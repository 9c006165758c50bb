//! Debug CLI for the deep-link resolver.
//!
//! Resolves links against logging capabilities (no real app attached), builds
//! shareable links, and prints the route table. Useful for checking what a
//! link would do before wiring it into a client build.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use deeplink_router::analytics::{AnalyticsRecorder, LinkSource};
use deeplink_router::config::{load_config, DeepLinkConfig};
use deeplink_router::dispatch::{HandlerContext, Navigator, PrefetchCache, PrefetchFuture};
use deeplink_router::link::build_link;
use deeplink_router::observability::logging;
use deeplink_router::resolver::DeepLinkResolver;
use deeplink_router::routing::RouteTable;

#[derive(Parser)]
#[command(name = "deeplink-cli")]
#[command(about = "Resolve, build, and inspect deep links", long_about = None)]
struct Cli {
    /// Optional TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more raw links and print the analytics report
    Resolve {
        /// Raw link strings (custom-scheme or https form)
        urls: Vec<String>,

        /// Link source: initial, foreground, or background
        #[arg(short, long, default_value = "foreground")]
        source: String,

        /// Treat the session as authenticated
        #[arg(short, long)]
        authenticated: bool,

        /// Also print aggregate stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a shareable link for an in-app path
    Build {
        /// In-app path, e.g. /sessions/abc123
        path: String,

        /// Query parameters as key=value, repeatable
        #[arg(short, long)]
        query: Vec<String>,
    },
    /// Print the route table
    Routes,
}

/// Navigator that logs instead of driving a navigation stack.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn push(&self, path: &str) {
        tracing::info!(%path, "navigate: push");
    }

    fn replace(&self, path: &str) {
        tracing::info!(%path, "navigate: replace");
    }
}

/// Prefetch capability that always reports a warm cache.
struct WarmCache;

impl PrefetchCache for WarmCache {
    fn prefetch(&self, key: &str) -> PrefetchFuture<'_> {
        tracing::info!(%key, "prefetch requested");
        Box::pin(async { Ok(()) })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DeepLinkConfig::default(),
    };

    logging::init(&config.observability.log_level);

    match cli.command {
        Commands::Resolve {
            urls,
            source,
            authenticated,
            json,
        } => {
            let source = parse_source(&source)?;
            let analytics = Arc::new(AnalyticsRecorder::with_capacity(
                config.analytics.event_capacity,
            ));
            let context = HandlerContext::new(
                Arc::new(LoggingNavigator),
                Arc::new(WarmCache),
                authenticated,
            );
            let resolver =
                DeepLinkResolver::new(RouteTable::with_default_routes(), analytics, context);

            for url in &urls {
                let handled = resolver.resolve(url, source).await;
                println!("{url} -> {}", if handled { "handled" } else { "not handled" });
            }

            println!();
            print!("{}", resolver.analytics().generate_report());

            if json {
                println!();
                println!("{}", serde_json::to_string_pretty(&resolver.analytics().stats())?);
            }
        }
        Commands::Build { path, query } => {
            let query = parse_query(&query)?;
            println!("{}", build_link(&config, &path, &query));
        }
        Commands::Routes => {
            let table = RouteTable::with_default_routes();
            for route in table.routes() {
                println!(
                    "{:<45} {:<20} auth={}",
                    route.pattern.to_string(),
                    route.handler.name(),
                    route.requires_auth
                );
            }
        }
    }

    Ok(())
}

fn parse_source(source: &str) -> Result<LinkSource, String> {
    match source {
        "initial" => Ok(LinkSource::Initial),
        "foreground" => Ok(LinkSource::Foreground),
        "background" => Ok(LinkSource::Background),
        other => Err(format!(
            "unknown source '{other}' (expected initial, foreground, or background)"
        )),
    }
}

fn parse_query(pairs: &[String]) -> Result<BTreeMap<String, String>, String> {
    let mut query = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("query parameter '{pair}' is not key=value"))?;
        query.insert(key.to_string(), value.to_string());
    }
    Ok(query)
}
