//! User settings for the appraisal tool
//!
//! Holds the vehicle and scenario the default run appraises, the market
//! parameters, and output preferences. Every field has a serde default so a
//! partial `config.json` is valid.

use serde::{Deserialize, Serialize};

use super::paths::AppraisePaths;
use crate::error::AppraisalError;
use crate::models::{MarketConfig, VehicleRecord};
use crate::services::Scenario;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Vehicle appraised when no vehicle flags are given
    #[serde(default)]
    pub vehicle: VehicleRecord,

    /// Categories and offer compared by the default run
    #[serde(default)]
    pub scenario: Scenario,

    /// Depreciation table and adjustment constants
    #[serde(default)]
    pub market: MarketConfig,

    /// Whether valuations are appended to the history log
    #[serde(default = "default_record_history")]
    pub record_history: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_record_history() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            vehicle: VehicleRecord::default(),
            scenario: Scenario::default(),
            market: MarketConfig::default(),
            record_history: default_record_history(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &AppraisePaths) -> Result<Self, AppraisalError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| AppraisalError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            AppraisalError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.market.validate()?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppraisePaths) -> Result<(), AppraisalError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AppraisalError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AppraisalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
