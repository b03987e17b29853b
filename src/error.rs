//! Custom error types for the appraisal tool
//!
//! Valuation itself never fails; these errors cover the surfaces around it:
//! settings files, user input, the valuation history log and exports.

use thiserror::Error;

/// The main error type for appraisal operations
#[derive(Error, Debug)]
pub enum AppraisalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Valuation history storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppraisalError {
    /// Create a validation error for a single invalid field
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation(format!("{}: {}", field, reason.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for AppraisalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppraisalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for appraisal operations
pub type AppraisalResult<T> = Result<T, AppraisalError>;
