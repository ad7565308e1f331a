//! Store factory - Creates setting stores based on configuration
//!
//! Every category gets its own store. With the SQLite backend all stores
//! share one connection pool and differ only by table.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::application::ports::outbound::SettingStorePort;
use crate::domain::value_objects::SettingCategory;
use crate::infrastructure::config::{StorageBackend, StorageConfig};
use crate::infrastructure::persistence::{InMemorySettingStore, SqliteSettingStore};

pub struct SettingStoreFactory {
    config: StorageConfig,
    sqlite_pool: Option<SqlitePool>,
}

impl SettingStoreFactory {
    /// Create a new store factory, connecting to SQLite when that backend is selected
    pub async fn new(config: StorageConfig) -> Result<Self> {
        let sqlite_pool = match config.backend {
            StorageBackend::Sqlite => {
                let pool = SqlitePoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(&config.database_url)
                    .await
                    .context("Failed to connect to SQLite settings database")?;
                tracing::info!("Connected to SQLite settings database: {}", config.database_url);
                Some(pool)
            }
            StorageBackend::Memory => None,
        };

        Ok(Self {
            config,
            sqlite_pool,
        })
    }

    /// Create the store for one category, seeding defaults if configured
    pub async fn create_store(&self, category: SettingCategory) -> Result<Arc<dyn SettingStorePort>> {
        match self.config.backend {
            StorageBackend::Memory => {
                let store = InMemorySettingStore::new();
                if self.config.seed_defaults {
                    let inserted = store.seed(category.defaults()).await;
                    tracing::debug!(%category, inserted, "Seeded in-memory settings");
                }
                Ok(Arc::new(store))
            }
            StorageBackend::Sqlite => {
                let pool = self
                    .sqlite_pool
                    .as_ref()
                    .context("SQLite pool not initialized")?;
                let store = SqliteSettingStore::new(pool.clone(), category)
                    .await
                    .with_context(|| format!("Failed to create {} table", category.table()))?;
                if self.config.seed_defaults {
                    let inserted = store
                        .seed(category.defaults())
                        .await
                        .with_context(|| format!("Failed to seed {} settings", category))?;
                    tracing::debug!(%category, inserted, "Seeded SQLite settings");
                }
                Ok(Arc::new(store))
            }
        }
    }
}
