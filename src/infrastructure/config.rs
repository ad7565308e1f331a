//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Settings storage configuration
    pub storage: StorageConfig,

    /// HTTP server port
    pub server_port: u16,
}

/// Which store implementation backs the settings categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => anyhow::bail!("unknown settings backend '{}' (expected sqlite or memory)", other),
        }
    }
}

/// Settings storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// SQLite connection URL
    pub database_url: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// Insert category defaults for keys that do not exist yet
    pub seed_defaults: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            storage: StorageConfig {
                backend: env::var("STOCKY_SETTINGS_BACKEND")
                    .unwrap_or_else(|_| "sqlite".to_string())
                    .parse()
                    .context("STOCKY_SETTINGS_BACKEND is invalid")?,
                database_url: env::var("STOCKY_DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://stocky.db?mode=rwc".to_string()),
                max_connections: env::var("STOCKY_DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("STOCKY_DB_MAX_CONNECTIONS must be a positive integer")?,
                seed_defaults: env::var("STOCKY_SEED_DEFAULTS")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .context("STOCKY_SEED_DEFAULTS must be true or false")?,
            },

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
