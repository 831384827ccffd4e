//! # Timezone Service Main Entry Point
//!
//! Initializes logging, loads configuration, builds the catalog and the
//! user registry, and serves the HTTP API until Ctrl-C.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timezone_service::catalog::Catalog;
use timezone_service::config::Config;
use timezone_service::registry::UserTimezoneRegistry;
use timezone_service::services::{app, AppState};
use timezone_service::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timezone_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Timezone Service v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::default();
    let registry = Arc::new(UserTimezoneRegistry::new());
    log_system_event(
        "Catalog loaded",
        Some(&format!("{} timezones", catalog.len())),
    );

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    info!("Server started on {}", addr);

    axum::serve(listener, app(AppState::new(catalog, registry)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log_system_event("Shutdown signal received", None);
}
