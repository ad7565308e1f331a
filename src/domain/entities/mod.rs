//! Domain entities - Core business objects with identity

mod setting;

pub use setting::Setting;
