// Main entry point for the document comparison API server

use std::sync::Arc;

use anyhow::{Context, Result};
use docdiff::SqliteStore;
use server_core::{build_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,docdiff=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let store = SqliteStore::new(&config.database_url)
        .await
        .context("Failed to open document store")?;
    tracing::info!(database_url = %config.database_url, "Document store ready");

    let state = AppState::new(Arc::new(store), config.extract_workers);
    let app = build_app(state, config.max_upload_bytes);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
