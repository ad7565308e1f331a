use async_trait::async_trait;

use crate::domain::entities::Setting;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Persistence contract for one category of settings, keyed by unique setting key
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingStorePort: Send + Sync {
    /// Every stored setting
    async fn find_all(&self) -> Result<Vec<Setting>, SettingsError>;

    /// Point lookup; `None` if no record has this key
    async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, SettingsError>;

    /// Overwrite the value of the record matching `key`, returning the number
    /// of rows affected (0 or 1 while keys stay unique)
    async fn update_value_by_key(&self, key: &str, value: &str) -> Result<u64, SettingsError>;
}
