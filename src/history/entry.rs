//! Valuation history entry
//!
//! One line of the valuation log: what was valued, under which category,
//! and what came out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AppraisalId, Money, VehicleRecord};
use crate::services::ValuationBreakdown;

/// A single recorded valuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationEntry {
    /// Unique ID of this valuation
    pub id: AppraisalId,

    /// When the valuation was run (UTC)
    pub timestamp: DateTime<Utc>,

    /// Vehicle label, e.g. "2023 Lexus RZ 450e"
    pub vehicle: String,

    /// Trim level, if any
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub trim: String,

    /// Category requested
    pub category: String,

    /// Rate actually applied
    pub rate: f64,

    /// Year the age was measured against
    pub reference_year: i32,

    /// Odometer reading at the time
    pub mileage: f64,

    /// Resulting value
    pub value: Money,
}

impl ValuationEntry {
    /// Record a completed valuation
    pub fn record(vehicle: &VehicleRecord, breakdown: &ValuationBreakdown, reference_year: i32) -> Self {
        Self {
            id: AppraisalId::new(),
            timestamp: Utc::now(),
            vehicle: vehicle.label(),
            trim: vehicle.trim.clone(),
            category: breakdown.category.clone(),
            rate: breakdown.rate,
            reference_year,
            mileage: vehicle.mileage,
            value: breakdown.money(),
        }
    }

    /// One-line summary for terminal output
    pub fn format_summary(&self, currency_symbol: &str) -> String {
        format!(
            "{} [{}] {} ({}, as of {}): {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.id,
            self.vehicle,
            self.category,
            self.reference_year,
            self.value.format_with_symbol(currency_symbol)
        )
    }
}
