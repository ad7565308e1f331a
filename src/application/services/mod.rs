//! Application services - Use case implementations
//!
//! Each settings category is served by a `SettingsService` (existence-checked
//! updates against a store port) fronted by a `SettingsGateway` (DTO
//! translation for transport adapters).

pub mod settings_gateway;
pub mod settings_service;

pub use settings_gateway::SettingsGateway;
pub use settings_service::SettingsService;
