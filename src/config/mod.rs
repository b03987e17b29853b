//! Configuration module for the appraisal tool
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence (vehicle, scenario, market parameters)

pub mod paths;
pub mod settings;

pub use paths::AppraisePaths;
pub use settings::Settings;
