//! Memoization Demo
//!
//! Shows the full startup sequence: tracing init, config load, store
//! construction, cached computation, shutdown.
//!
//! Run with: cargo run --example memoize

use std::time::Duration;

use anyhow::Result;
use autocache::{CacheStore, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "debug" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autocache=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: object_lifetime={}ms, eviction_interval={}ms",
        config.object_lifetime_ms, config.eviction_interval_ms
    );

    let store = CacheStore::with_config(&config)?;
    info!("Cache store initialized");

    // First call computes, second call is served from the cache.
    let report = store.get_or_create("daily-report", build_report).await?;
    info!("Computed report: {}", report);

    let cached = store.get_or_create("daily-report", build_report).await?;
    info!("Cached report:   {}", cached);

    store.shutdown();
    info!("Eviction task stopped");

    Ok(())
}

/// Stands in for an expensive computation worth keeping warm.
fn build_report() -> String {
    std::thread::sleep(Duration::from_millis(50));
    "sales are up 4%".to_string()
}
