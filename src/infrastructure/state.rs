//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{SettingsGateway, SettingsService};
use crate::domain::value_objects::SettingCategory;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::SettingStoreFactory;

/// Shared application state
pub struct AppState {
    pub settings: SettingsGateways,
}

/// One gateway per settings category
///
/// Each category has its own store, service and gateway, all built once at startup.
pub struct SettingsGateways {
    pub notification: SettingsGateway,
    pub product: SettingsGateway,
    pub company_region: SettingsGateway,
}

impl SettingsGateways {
    pub fn for_category(&self, category: SettingCategory) -> &SettingsGateway {
        match category {
            SettingCategory::Notification => &self.notification,
            SettingCategory::Product => &self.product,
            SettingCategory::CompanyRegion => &self.company_region,
        }
    }
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let factory = SettingStoreFactory::new(config.storage.clone()).await?;

        let settings = SettingsGateways {
            notification: build_gateway(&factory, SettingCategory::Notification).await?,
            product: build_gateway(&factory, SettingCategory::Product).await?,
            company_region: build_gateway(&factory, SettingCategory::CompanyRegion).await?,
        };

        Ok(Self { settings })
    }
}

async fn build_gateway(
    factory: &SettingStoreFactory,
    category: SettingCategory,
) -> Result<SettingsGateway> {
    let store = factory.create_store(category).await?;
    let service = Arc::new(SettingsService::new(category, store));
    Ok(SettingsGateway::new(service))
}
