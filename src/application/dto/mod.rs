//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without pulling serde into the domain model.

pub mod response;
pub mod setting;

pub use response::GatewayResponse;
pub use setting::SettingDto;
