//! User settings for the finance tracker
//!
//! Presentation-side preferences only. Alert thresholds, budget status bands
//! and health score weights are fixed and deliberately absent here.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::FinanceError;

/// How trailing month windows are stepped back from a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MonthWindow {
    /// True calendar-month stepping (default)
    #[default]
    Calendar,
    /// Step back 30 days at a time from the first of the month
    ///
    /// Matches ledgers analysed by older versions of the tracker; it can
    /// repeat or skip a month near month boundaries.
    ThirtyDayOffsets,
}

/// User settings for the finance tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in alert and recommendation messages
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Month stepping used for trend and stability windows
    #[serde(default)]
    pub month_window: MonthWindow,

    /// Number of categories listed as top spending
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// Number of expenses listed in the monthly report
    #[serde(default = "default_top_expenses")]
    pub top_expenses: usize,

    /// Maximum bar length of a distribution chart
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs".to_string()
}

fn default_top_categories() -> usize {
    3
}

fn default_top_expenses() -> usize {
    5
}

fn default_chart_width() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            month_window: MonthWindow::default(),
            top_categories: default_top_categories(),
            top_expenses: default_top_expenses(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "Rs");
        assert_eq!(settings.month_window, MonthWindow::Calendar);
        assert_eq!(settings.top_categories, 3);
        assert_eq!(settings.top_expenses, 5);
        assert_eq!(settings.chart_width, 20);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "$".into(),
            month_window: MonthWindow::ThirtyDayOffsets,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.month_window, MonthWindow::ThirtyDayOffsets);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol":"EUR"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "EUR");
        assert_eq!(settings.top_expenses, 5);
        assert_eq!(settings.month_window, MonthWindow::Calendar);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
    }
}
