//! Settings persistence adapters
//!
//! Implements `SettingStorePort` over SQLite and over process memory, plus
//! the factory that picks one at startup.

mod factory;
mod memory_setting_store;
mod sqlite_setting_store;

pub use factory::SettingStoreFactory;
pub use memory_setting_store::InMemorySettingStore;
pub use sqlite_setting_store::SqliteSettingStore;
