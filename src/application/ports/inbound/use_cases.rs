//! Use cases offered to transport adapters

use async_trait::async_trait;

use crate::application::dto::{GatewayResponse, SettingDto};
use crate::application::ports::outbound::SettingsError;

/// Point and bulk settings operations, expressed in transport DTOs
///
/// Domain failures never surface as errors here: an unknown key reads as
/// `NoContent` and a rejected write reads as `false`. Only storage failures
/// outside a bulk update escape as `Err`.
#[async_trait]
pub trait ManageSettingsUseCase: Send + Sync {
    async fn get(&self, key: &str) -> Result<GatewayResponse<SettingDto>, SettingsError>;

    async fn get_all(&self) -> Result<GatewayResponse<Vec<SettingDto>>, SettingsError>;

    async fn update(&self, dto: SettingDto) -> Result<GatewayResponse<bool>, SettingsError>;

    async fn update_all(&self, dtos: Vec<SettingDto>) -> GatewayResponse<bool>;
}
