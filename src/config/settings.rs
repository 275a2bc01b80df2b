//! User settings for the savings challenge
//!
//! Manages the start offset that anchors challenge day 0 to a calendar date,
//! and output preferences.

use serde::{Deserialize, Serialize};

use super::paths::SavingsPaths;
use crate::error::SavingsError;
use crate::models::Month;

/// User settings for the savings challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Days into the start month that challenge day 0 falls on
    #[serde(default)]
    pub start_day: u32,

    /// 0-based month index (0 = January) of the start date
    #[serde(default)]
    pub start_month: u32,

    /// Whether to colour terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            start_day: 0,
            start_month: 0,
            color: default_color(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &SavingsPaths) -> Result<Self, SavingsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SavingsError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SavingsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SavingsPaths) -> Result<(), SavingsError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SavingsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            SavingsError::Io(format!("Failed to write settings file: {}", e))
        })?;

        tracing::info!(path = %settings_path.display(), "saved settings");
        Ok(())
    }

    /// Apply command-line or environment overrides for the start offset
    pub fn with_start(mut self, start_day: Option<u32>, start_month: Option<u32>) -> Self {
        if let Some(day) = start_day {
            self.start_day = day;
        }
        if let Some(month) = start_month {
            self.start_month = month;
        }
        self
    }

    /// Human-readable start offset, e.g. "day 0 of January"
    pub fn describe_start(&self) -> String {
        match Month::from_index(self.start_month as usize) {
            Some(month) => format!("day {} of {}", self.start_day, month),
            None => format!("day {} of month index {}", self.start_day, self.start_month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.start_day, 0);
        assert_eq!(settings.start_month, 0);
        assert!(settings.color);
        assert_eq!(settings.describe_start(), "day 0 of January");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavingsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavingsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            color: false,
            ..Settings::default()
        }
        .with_start(Some(14), Some(1));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.start_day, 14);
        assert_eq!(loaded.start_month, 1);
        assert!(!loaded.color);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavingsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"start_day": 3}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.start_day, 3);
        assert_eq!(loaded.start_month, 0);
        assert!(loaded.color);
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavingsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SavingsError::Config(_)));
    }

    #[test]
    fn test_with_start_keeps_unset_fields() {
        let settings = Settings::default().with_start(None, Some(11));
        assert_eq!(settings.start_day, 0);
        assert_eq!(settings.start_month, 11);
        assert_eq!(settings.describe_start(), "day 0 of December");
    }
}
