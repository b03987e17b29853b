//! Path management for the appraisal tool
//!
//! ## Path Resolution Order
//!
//! 1. `APPRAISE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `appraise-cli`
//!    (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::AppraisalError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "APPRAISE_DATA_DIR";

const APP_DIR_NAME: &str = "appraise-cli";

/// Manages all paths used by the appraisal tool
#[derive(Debug, Clone)]
pub struct AppraisePaths {
    /// Base directory for settings and history
    base_dir: PathBuf,
}

impl AppraisePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the home directory cannot
    /// be determined.
    pub fn new() -> Result<Self, AppraisalError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the valuation history log
    pub fn history_log(&self) -> PathBuf {
        self.base_dir.join("valuations.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AppraisalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AppraisalError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, AppraisalError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| AppraisalError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
