//! Stocky API - Backend for inventory and stock management settings
//!
//! The API serves the key/value settings of the inventory backend:
//! - Notification settings (stock alerts)
//! - Product settings (catalogue behaviour)
//! - Company region details (locale, currency)
//!
//! Each category is persisted in SQLite (or memory) and exposed over REST.

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::value_objects::SettingCategory;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stocky_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stocky API");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Settings backend: {:?}", config.storage.backend);
    tracing::info!("  Database: {}", config.storage.database_url);
    for category in SettingCategory::ALL {
        tracing::info!("  Category {} -> {}", category, category.table());
    }

    // Initialize application state
    let state = AppState::new(&config).await?;
    let state = Arc::new(state);
    tracing::info!("Application state initialized");

    let app = http::create_router(state);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let server = axum::serve(listener, app);

    // Wait for shutdown signal (Ctrl+C)
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping server");
        }
    }

    Ok(())
}
