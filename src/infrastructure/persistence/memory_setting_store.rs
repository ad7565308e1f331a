//! In-memory settings store, for the `memory` backend and for tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{SettingStorePort, SettingsError};
use crate::domain::entities::Setting;
use crate::domain::value_objects::SettingId;

/// Settings held in a key-ordered map; contents are lost on restart
pub struct InMemorySettingStore {
    settings: RwLock<BTreeMap<String, Setting>>,
    next_id: AtomicI64,
}

impl InMemorySettingStore {
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert each default whose key is not stored yet; returns how many were inserted
    pub async fn seed(&self, defaults: &[(&str, &str)]) -> u64 {
        let mut settings = self.settings.write().await;
        let mut inserted = 0;
        for &(key, value) in defaults {
            if settings.contains_key(key) {
                continue;
            }
            let id = SettingId::from_raw(self.next_id.fetch_add(1, Ordering::Relaxed));
            let setting = Setting::new(key, value)
                .with_id(id)
                .with_updated_at(Utc::now());
            settings.insert(key.to_string(), setting);
            inserted += 1;
        }
        inserted
    }
}

impl Default for InMemorySettingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingStorePort for InMemorySettingStore {
    async fn find_all(&self) -> Result<Vec<Setting>, SettingsError> {
        let mut all: Vec<Setting> = self.settings.read().await.values().cloned().collect();
        all.sort_by_key(|s| s.id);
        Ok(all)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, SettingsError> {
        Ok(self.settings.read().await.get(key).cloned())
    }

    async fn update_value_by_key(&self, key: &str, value: &str) -> Result<u64, SettingsError> {
        let mut settings = self.settings.write().await;
        match settings.get_mut(key) {
            Some(setting) => {
                setting.value = value.to_string();
                setting.updated_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
