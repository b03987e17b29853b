//! Export module for appraisal reports
//!
//! - CSV: one row per report line (spreadsheet-compatible)
//! - JSON: machine-readable snapshot with schema version
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
