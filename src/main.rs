use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use imaging_api::api::start_api_server;
use imaging_api::config::{ServerConfig, APP_VERSION};
use imaging_api::db::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("imaging-api starting v{APP_VERSION}");

    if !config.db_path.exists() {
        // The store belongs to the ingestion process and may appear
        // later; until then every query fails with a storage error.
        tracing::warn!(
            path = %config.db_path.display(),
            "database file not found; requests will fail until it exists"
        );
    }

    let store = Arc::new(Store::new(&config.db_path));
    let mut server = start_api_server(&config, store)
        .await
        .context("start API server")?;

    tokio::signal::ctrl_c()
        .await
        .context("listen for shutdown signal")?;
    tracing::info!("shutdown signal received");

    server.shutdown();
    server.wait().await;
    Ok(())
}
