use album_store::albums::store::AlbumStore;
use album_store::app;
use album_store::config::Config;
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Store:
    let store = if config.empty {
        AlbumStore::default()
    } else {
        AlbumStore::seeded()
    };
    if store.is_empty().await {
        tracing::info!("Album store ready, starting empty");
    } else {
        tracing::info!("Album store ready with {} albums", store.len().await);
    }

    // 2. HTTP Router:
    let app = app(Arc::new(store));

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
