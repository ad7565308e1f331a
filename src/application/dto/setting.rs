use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Setting;
use crate::domain::value_objects::SettingId;

/// Wire shape of a setting, used for both reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub setting_key: String,
    pub setting_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Setting> for SettingDto {
    fn from(s: Setting) -> Self {
        Self {
            id: s.id.map(i64::from),
            setting_key: s.key,
            setting_value: s.value,
            updated_at: s.updated_at,
        }
    }
}

impl From<SettingDto> for Setting {
    fn from(dto: SettingDto) -> Self {
        Self {
            id: dto.id.map(SettingId::from_raw),
            key: dto.setting_key,
            value: dto.setting_value,
            updated_at: dto.updated_at,
        }
    }
}
