use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::application::ports::outbound::{SettingStorePort, SettingsError};
use crate::domain::entities::Setting;
use crate::domain::value_objects::{SettingCategory, SettingId};

type SettingRow = (i64, String, String, DateTime<Utc>);

/// SQLite store for one settings category, one table per category
pub struct SqliteSettingStore {
    pool: SqlitePool,
    table: &'static str,
}

impl SqliteSettingStore {
    pub async fn new(pool: SqlitePool, category: SettingCategory) -> Result<Self, sqlx::Error> {
        let table = category.table();

        // Create table if not exists
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                setting_key TEXT NOT NULL UNIQUE,
                setting_value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#
        ))
        .execute(&pool)
        .await?;

        Ok(Self { pool, table })
    }

    /// Insert each default whose key is not stored yet; existing values are kept.
    /// Returns how many rows were inserted.
    pub async fn seed(&self, defaults: &[(&str, &str)]) -> Result<u64, SettingsError> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} (setting_key, setting_value, updated_at) VALUES (?, ?, ?)",
            self.table
        );
        let mut inserted = 0;
        for &(key, value) in defaults {
            inserted += sqlx::query(&sql)
                .bind(key)
                .bind(value)
                .bind(Utc::now())
                .execute(&self.pool)
                .await
                .map_err(|e| SettingsError::Database(e.to_string()))?
                .rows_affected();
        }
        Ok(inserted)
    }
}

fn into_setting((id, key, value, updated_at): SettingRow) -> Setting {
    Setting::new(key, value)
        .with_id(SettingId::from_raw(id))
        .with_updated_at(updated_at)
}

#[async_trait]
impl SettingStorePort for SqliteSettingStore {
    async fn find_all(&self) -> Result<Vec<Setting>, SettingsError> {
        let rows: Vec<SettingRow> = sqlx::query_as(&format!(
            "SELECT id, setting_key, setting_value, updated_at FROM {} ORDER BY id",
            self.table
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SettingsError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(into_setting).collect())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, SettingsError> {
        let row: Option<SettingRow> = sqlx::query_as(&format!(
            "SELECT id, setting_key, setting_value, updated_at FROM {} WHERE setting_key = ?",
            self.table
        ))
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SettingsError::Database(e.to_string()))?;

        Ok(row.map(into_setting))
    }

    async fn update_value_by_key(&self, key: &str, value: &str) -> Result<u64, SettingsError> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET setting_value = ?, updated_at = ? WHERE setting_key = ?",
            self.table
        ))
        .bind(value)
        .bind(Utc::now())
        .bind(key)
        .execute(&self.pool)
        .await
        .map_err(|e| SettingsError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
