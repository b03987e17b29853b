//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod appraise;
pub mod export;
pub mod history;
pub mod market;

pub use appraise::{
    handle_appraise_command, handle_estimate_command, AppraiseArgs, EstimateArgs, VehicleArgs,
};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::{handle_history_command, HistoryArgs};
pub use market::{handle_categories_command, handle_config_command, handle_init_command};
