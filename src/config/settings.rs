//! User settings for Money Lodge
//!
//! Manages user preferences: currency symbol, date format and the savings
//! goal used to seed months that have never been edited.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::LodgePaths;
use crate::error::LodgeError;
use crate::models::Amount;

/// User settings for Money Lodge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Savings goal percentage for newly seeded months
    #[serde(default = "default_savings_goal")]
    pub default_savings_goal: Amount,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_savings_goal() -> Amount {
    Amount::new(crate::models::DEFAULT_SAVINGS_GOAL)
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Whether chrono can render a date with this strftime string
fn is_renderable_date_format(format: &str) -> bool {
    let Some(sample) = NaiveDate::from_ymd_opt(2000, 1, 31) else {
        return false;
    };
    let mut text = String::new();
    write!(text, "{}", sample.format(format)).is_ok()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_savings_goal: default_savings_goal(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LodgePaths) -> Result<Self, LodgeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LodgeError::Io(format!("Failed to read settings file: {}", e)))?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LodgeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if !is_renderable_date_format(&settings.date_format) {
                warn!(
                    date_format = %settings.date_format,
                    "unusable date format in settings, using the default"
                );
                settings.date_format = default_date_format();
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LodgePaths) -> Result<(), LodgeError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LodgeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LodgeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
