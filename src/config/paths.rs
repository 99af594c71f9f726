//! Path management for Money Lodge
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `LODGE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/lodge-cli` or `~/.config/lodge-cli`
//! 3. Windows: `%APPDATA%\lodge-cli`

use std::path::PathBuf;

use crate::error::LodgeError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "LODGE_CLI_DATA_DIR";

/// Manages all paths used by Money Lodge
#[derive(Debug, Clone)]
pub struct LodgePaths {
    /// Base directory for all Money Lodge data
    base_dir: PathBuf,
}

impl LodgePaths {
    /// Create a new LodgePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LodgeError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LodgePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/lodge-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/lodge-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to months.json (every month record, one blob)
    pub fn months_file(&self) -> PathBuf {
        self.data_dir().join("months.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), LodgeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LodgeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LodgeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Money Lodge has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LodgeError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                LodgeError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("lodge-cli"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LodgeError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LodgeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("lodge-cli"))
}
