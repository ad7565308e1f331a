//! Value objects - Immutable objects defined by their attributes

mod ids;
mod settings;

pub use ids::*;
pub use settings::SettingCategory;
