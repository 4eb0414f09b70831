//! User settings for the expense tracker
//!
//! Manages user preferences such as the currency symbol shown next to totals,
//! how long status messages stay on screen, and the category suggestions.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::category::DEFAULT_CATEGORIES;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Seconds before a status message clears itself
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,

    /// Insert the sample records when the store is empty at startup
    #[serde(default = "default_seed_on_first_run")]
    pub seed_on_first_run: bool,

    /// Category suggestions offered by the form and the category filter
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_status_timeout() -> u64 {
    4
}

fn default_seed_on_first_run() -> bool {
    true
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            status_timeout_secs: default_status_timeout(),
            seed_on_first_run: default_seed_on_first_run(),
            categories: default_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ExpenseError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if settings.categories.is_empty() {
            settings.categories = default_categories();
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}
