//! Display formatting for terminal output
//!
//! Provides plain-text formatting for appraisal reports, valuation
//! breakdowns, and the market table.

pub mod market;
pub mod report;

pub use market::format_category_table;
pub use report::{format_breakdown, format_scenario_report};
