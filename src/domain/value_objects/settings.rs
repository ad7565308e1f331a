//! Setting categories
//!
//! # Architectural Note (Settings Categories)
//!
//! Every category shares the same key/value shape, so a category only decides
//! where its records live and which keys exist on first start. The serde
//! names double as the category segment of the REST path.

use serde::{Deserialize, Serialize};

/// The families of key/value settings the inventory backend manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingCategory {
    /// Stock alerts and notification toggles
    Notification,
    /// Product catalogue behaviour
    Product,
    /// Company locale and regional details
    CompanyRegion,
}

impl SettingCategory {
    pub const ALL: [SettingCategory; 3] = [
        SettingCategory::Notification,
        SettingCategory::Product,
        SettingCategory::CompanyRegion,
    ];

    /// Storage table backing this category
    pub fn table(&self) -> &'static str {
        match self {
            SettingCategory::Notification => "setting_notifications",
            SettingCategory::Product => "setting_products",
            SettingCategory::CompanyRegion => "company_region_details",
        }
    }

    /// Keys created on first start, with their initial values
    pub fn defaults(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            SettingCategory::Notification => &[
                ("notify_low_stock", "true"),
                ("notify_out_of_stock", "true"),
                ("notify_expiring_products", "true"),
                ("expiry_warning_days", "30"),
            ],
            SettingCategory::Product => &[
                ("auto_generate_sku", "true"),
                ("allow_negative_stock", "false"),
                ("low_stock_threshold", "10"),
                ("default_markup_percent", "0"),
            ],
            SettingCategory::CompanyRegion => &[
                ("country", ""),
                ("currency", ""),
                ("timezone", "UTC"),
                ("date_format", "dd/MM/yyyy"),
            ],
        }
    }
}

impl std::fmt::Display for SettingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SettingCategory::Notification => "notification",
            SettingCategory::Product => "product",
            SettingCategory::CompanyRegion => "company-region",
        };
        write!(f, "{}", name)
    }
}
