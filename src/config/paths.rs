//! Path management for BudgeIt
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGEIT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budgeit` or `~/.config/budgeit`
//! 3. Windows: `%APPDATA%\budgeit`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::LedgerError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGEIT_DATA_DIR";

/// Manages all paths used by BudgeIt
#[derive(Debug, Clone)]
pub struct BudgeitPaths {
    base_dir: PathBuf,
}

impl BudgeitPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgeitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/budgeit/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/budgeit/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the event log
    pub fn event_log(&self) -> PathBuf {
        self.base_dir.join("events.log")
    }

    /// Get the path to the saved account
    pub fn account_file(&self) -> PathBuf {
        self.data_dir().join("account.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if BudgeIt has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config"))
            .ok_or_else(|| LedgerError::Config("Could not determine home directory".into()))?,
    };
    Ok(config_base.join("budgeit"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(appdata.join("budgeit"))
}
