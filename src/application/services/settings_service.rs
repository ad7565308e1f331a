//! Settings Service - Existence-checked updates over a setting store
//!
//! Single updates only touch keys that already exist. Bulk updates are
//! best-effort: the batch reports success when no storage error occurred,
//! whatever each individual update answered, and items written before a
//! failure stay written.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::application::ports::outbound::{SettingStorePort, SettingsError};
use crate::domain::entities::Setting;
use crate::domain::value_objects::SettingCategory;

pub struct SettingsService {
    category: SettingCategory,
    repository: Arc<dyn SettingStorePort>,
}

impl SettingsService {
    pub fn new(category: SettingCategory, repository: Arc<dyn SettingStorePort>) -> Self {
        Self {
            category,
            repository,
        }
    }

    #[instrument(skip(self), fields(category = %self.category))]
    pub async fn all(&self) -> Result<Vec<Setting>, SettingsError> {
        debug!("Listing all settings");
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(category = %self.category))]
    pub async fn get(&self, key: &str) -> Result<Option<Setting>, SettingsError> {
        debug!(key, "Fetching setting");
        self.repository.find_by_key(key).await
    }

    /// Set the value of an existing key
    ///
    /// Returns `false` without writing when the key is unknown, and `false`
    /// when the write did not hit exactly one row (the record vanished
    /// between lookup and write).
    #[instrument(skip(self, value), fields(category = %self.category))]
    pub async fn update(&self, key: &str, value: &str) -> Result<bool, SettingsError> {
        if self.get(key).await?.is_none() {
            debug!(key, "Ignoring update for unknown setting");
            return Ok(false);
        }

        let affected = self.repository.update_value_by_key(key, value).await?;
        if affected != 1 {
            warn!(key, affected, "Setting update did not affect exactly one row");
            return Ok(false);
        }

        info!(key, "Updated setting");
        Ok(true)
    }

    /// Apply every setting in order, stopping at the first storage error
    ///
    /// Per-item results are discarded; see the module docs.
    #[instrument(skip(self, settings), fields(category = %self.category, count = settings.len()))]
    pub async fn update_many(&self, settings: &[Setting]) -> bool {
        for setting in settings {
            if let Err(e) = self.update(&setting.key, &setting.value).await {
                error!(key = %setting.key, error = %e, "Bulk settings update aborted");
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::application::ports::outbound::MockSettingStorePort;
    use crate::domain::value_objects::SettingId;
    use crate::infrastructure::persistence::InMemorySettingStore;

    async fn memory_service(seed: &[(&'static str, &'static str)]) -> SettingsService {
        let store = InMemorySettingStore::new();
        store.seed(seed).await;
        SettingsService::new(SettingCategory::Product, Arc::new(store))
    }

    fn stored(key: &str, value: &str) -> Setting {
        Setting::new(key, value).with_id(SettingId::from_raw(1))
    }

    #[tokio::test]
    async fn test_update_unknown_key_returns_false_and_leaves_store_unchanged() {
        let service = memory_service(&[("low_stock_threshold", "10")]).await;
        let before = service.all().await.unwrap();

        let updated = service.update("does_not_exist", "5").await.unwrap();

        assert!(!updated);
        assert_eq!(service.all().await.unwrap(), before);
        assert!(service.get("does_not_exist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_known_key_is_visible_to_next_get() {
        let service = memory_service(&[("low_stock_threshold", "10")]).await;

        let updated = service.update("low_stock_threshold", "25").await.unwrap();

        assert!(updated);
        let setting = service.get("low_stock_threshold").await.unwrap().unwrap();
        assert_eq!(setting.value, "25");
    }

    #[tokio::test]
    async fn test_update_unknown_key_never_writes() {
        let mut store = MockSettingStorePort::new();
        store
            .expect_find_by_key()
            .with(eq("missing"))
            .times(1)
            .returning(|_| Ok(None));
        store.expect_update_value_by_key().times(0);

        let service = SettingsService::new(SettingCategory::Notification, Arc::new(store));
        assert!(!service.update("missing", "x").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_reports_false_when_zero_rows_match() {
        let mut store = MockSettingStorePort::new();
        store
            .expect_find_by_key()
            .returning(|key| Ok(Some(stored(key, "old"))));
        store
            .expect_update_value_by_key()
            .with(eq("currency"), eq("NGN"))
            .times(1)
            .returning(|_, _| Ok(0));

        let service = SettingsService::new(SettingCategory::CompanyRegion, Arc::new(store));
        assert!(!service.update("currency", "NGN").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_reports_false_when_several_rows_match() {
        let mut store = MockSettingStorePort::new();
        store
            .expect_find_by_key()
            .returning(|key| Ok(Some(stored(key, "old"))));
        store.expect_update_value_by_key().returning(|_, _| Ok(2));

        let service = SettingsService::new(SettingCategory::CompanyRegion, Arc::new(store));
        assert!(!service.update("currency", "NGN").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_propagates_storage_error() {
        let mut store = MockSettingStorePort::new();
        store
            .expect_find_by_key()
            .returning(|_| Err(SettingsError::Database("disk I/O error".to_string())));

        let service = SettingsService::new(SettingCategory::Product, Arc::new(store));
        let result = service.update("auto_generate_sku", "false").await;
        assert!(matches!(result, Err(SettingsError::Database(_))));
    }

    #[tokio::test]
    async fn test_update_many_empty_batch_touches_no_storage() {
        let mut store = MockSettingStorePort::new();
        store.expect_find_all().times(0);
        store.expect_find_by_key().times(0);
        store.expect_update_value_by_key().times(0);

        let service = SettingsService::new(SettingCategory::Product, Arc::new(store));
        assert!(service.update_many(&[]).await);
    }

    #[tokio::test]
    async fn test_update_many_succeeds_even_when_an_item_is_unknown() {
        let service = memory_service(&[("auto_generate_sku", "true")]).await;
        let batch = vec![
            Setting::new("unknown_key", "1"),
            Setting::new("auto_generate_sku", "false"),
        ];

        assert!(service.update_many(&batch).await);

        let sku = service.get("auto_generate_sku").await.unwrap().unwrap();
        assert_eq!(sku.value, "false");
        assert!(service.get("unknown_key").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_many_aborts_on_error_without_rollback() {
        let mut store = MockSettingStorePort::new();
        store
            .expect_find_by_key()
            .with(eq("first"))
            .times(1)
            .returning(|key| Ok(Some(stored(key, "a"))));
        store
            .expect_update_value_by_key()
            .with(eq("first"), eq("A"))
            .times(1)
            .returning(|_, _| Ok(1));
        store
            .expect_find_by_key()
            .with(eq("second"))
            .times(1)
            .returning(|_| Err(SettingsError::Database("connection reset".to_string())));
        store.expect_find_by_key().with(eq("third")).times(0);

        let service = SettingsService::new(SettingCategory::Notification, Arc::new(store));
        let batch = vec![
            Setting::new("first", "A"),
            Setting::new("second", "B"),
            Setting::new("third", "C"),
        ];

        assert!(!service.update_many(&batch).await);
    }

    #[tokio::test]
    async fn test_update_many_aborts_when_write_fails_after_lookup() {
        let mut store = MockSettingStorePort::new();
        store
            .expect_find_by_key()
            .with(eq("timezone"))
            .times(1)
            .returning(|key| Ok(Some(stored(key, "UTC"))));
        store
            .expect_update_value_by_key()
            .with(eq("timezone"), eq("WAT"))
            .times(1)
            .returning(|_, _| Err(SettingsError::Database("database is locked".to_string())));
        store.expect_find_by_key().with(eq("currency")).times(0);

        let service = SettingsService::new(SettingCategory::CompanyRegion, Arc::new(store));
        let batch = vec![Setting::new("timezone", "WAT"), Setting::new("currency", "NGN")];

        assert!(!service.update_many(&batch).await);
    }

    #[tokio::test]
    async fn test_concurrent_updates_both_land_when_each_hits_one_row() {
        let service = memory_service(&[("timezone", "UTC")]).await;

        let (a, b) = tokio::join!(
            service.update("timezone", "Africa/Lagos"),
            service.update("timezone", "Europe/London"),
        );

        assert!(a.unwrap());
        assert!(b.unwrap());
        let value = service.get("timezone").await.unwrap().unwrap().value;
        assert!(value == "Africa/Lagos" || value == "Europe/London");
    }
}
