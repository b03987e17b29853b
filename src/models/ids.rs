//! Identifier for recorded appraisals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "apr-";

/// Unique ID of one recorded valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppraisalId(Uuid);

impl AppraisalId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AppraisalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AppraisalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl FromStr for AppraisalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
