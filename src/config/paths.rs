//! Path management for the savings challenge
//!
//! Provides XDG-compliant path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `SAVINGS_CHALLENGE_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/savings-challenge` or `~/.config/savings-challenge`
//! 3. Windows: `%APPDATA%\savings-challenge`

use std::path::PathBuf;

use crate::error::SavingsError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "SAVINGS_CHALLENGE_DIR";

/// Manages all paths used by the savings challenge
#[derive(Debug, Clone)]
pub struct SavingsPaths {
    /// Base directory for all savings challenge files
    base_dir: PathBuf,
}

impl SavingsPaths {
    /// Create a new SavingsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be
    /// determined.
    pub fn new() -> Result<Self, SavingsError> {
        let base_dir = if let Some(custom) = std::env::var_os(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SavingsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/savings-challenge/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SavingsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SavingsError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SavingsError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => {
            let home = std::env::var_os("HOME").ok_or_else(|| {
                SavingsError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("savings-challenge"))
}

/// Resolve the default directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SavingsError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| SavingsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("savings-challenge"))
}
