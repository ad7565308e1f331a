//! Outbound ports - Interfaces that the application requires from external systems

mod settings_port;

#[cfg(test)]
pub use settings_port::MockSettingStorePort;
pub use settings_port::{SettingStorePort, SettingsError};
