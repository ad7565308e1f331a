//! Settings Gateway - DTO translation in front of the settings service

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{GatewayResponse, SettingDto};
use crate::application::ports::inbound::ManageSettingsUseCase;
use crate::application::ports::outbound::SettingsError;
use crate::application::services::SettingsService;
use crate::domain::entities::Setting;

pub struct SettingsGateway {
    service: Arc<SettingsService>,
}

impl SettingsGateway {
    pub fn new(service: Arc<SettingsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ManageSettingsUseCase for SettingsGateway {
    async fn get(&self, key: &str) -> Result<GatewayResponse<SettingDto>, SettingsError> {
        let setting = self.service.get(key).await?;
        Ok(setting.map(SettingDto::from).into())
    }

    async fn get_all(&self) -> Result<GatewayResponse<Vec<SettingDto>>, SettingsError> {
        let settings = self.service.all().await?;
        Ok(GatewayResponse::Ok(
            settings.into_iter().map(SettingDto::from).collect(),
        ))
    }

    async fn update(&self, dto: SettingDto) -> Result<GatewayResponse<bool>, SettingsError> {
        let updated = self
            .service
            .update(&dto.setting_key, &dto.setting_value)
            .await?;
        Ok(GatewayResponse::Ok(updated))
    }

    async fn update_all(&self, dtos: Vec<SettingDto>) -> GatewayResponse<bool> {
        let settings: Vec<Setting> = dtos.into_iter().map(Setting::from).collect();
        GatewayResponse::Ok(self.service.update_many(&settings).await)
    }
}
