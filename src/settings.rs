use serde::Deserialize;

use crate::vault::VaultReadable;

/// `settings` entry of the vault's `config.json`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Payments shown before the first "load more"
    pub page_size: usize,
    /// Payments added by each "load more"
    pub page_step: usize,
    /// Payments shown per page of a single recurring payment
    pub detail_page_size: usize,
    /// Upper bound of payments examined when filtering by name
    pub scan_limit: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            page_size: 10,
            page_step: 10,
            detail_page_size: 5,
            scan_limit: 10_000,
            log_level: "warn".to_string(),
        }
    }
}

impl VaultReadable for Settings {
    const KEY: &'static str = "settings";
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("page_size", self.page_size),
            ("page_step", self.page_step),
            ("detail_page_size", self.detail_page_size),
            ("scan_limit", self.scan_limit),
        ] {
            if value == 0 {
                return Err(format!("Setting {} must be at least 1", name));
            }
        }
        Ok(())
    }
}
