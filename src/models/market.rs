//! Market configuration
//!
//! Holds the depreciation table and the fixed adjustment constants used by
//! the valuation calculator, so alternate market conditions can be modelled
//! from a settings file instead of code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{AppraisalError, AppraisalResult};

/// Category used for the optimistic "book" scenario
pub const STANDARD: &str = "Standard";

/// Category for conventional luxury vehicles; its rate is also the fallback
pub const LUXURY_GAS: &str = "Luxury_Gas";

/// Category for luxury electric vehicles
pub const LUXURY_EV: &str = "Luxury_EV";

/// Category for Toyota hybrids
pub const TOYOTA_HYBRID: &str = "Toyota_Hybrid";

/// Mapping from depreciation category name to annual depreciation rate
pub type DepreciationTable = BTreeMap<String, f64>;

/// Market parameters for a valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Annual depreciation rate per category, each in [0, 1)
    #[serde(default = "default_depreciation_rates")]
    pub depreciation_rates: DepreciationTable,

    /// Rate applied when a category is not in the table
    #[serde(default = "default_fallback_rate")]
    pub default_rate: f64,

    /// Fraction a dealer keeps between retail residual and trade-in
    #[serde(default = "default_dealer_margin")]
    pub dealer_margin: f64,

    /// Penalty per mile over the allowance
    #[serde(default = "default_mileage_penalty")]
    pub mileage_penalty_per_mile: f64,

    /// Miles per year of age that carry no penalty
    #[serde(default = "default_mileage_allowance")]
    pub annual_mileage_allowance: f64,
}

fn default_depreciation_rates() -> DepreciationTable {
    let mut rates = BTreeMap::new();
    rates.insert(STANDARD.to_string(), 0.15);
    rates.insert(LUXURY_GAS.to_string(), 0.20);
    rates.insert(LUXURY_EV.to_string(), 0.38);
    rates.insert(TOYOTA_HYBRID.to_string(), 0.10);
    rates
}

fn default_fallback_rate() -> f64 {
    0.20
}

fn default_dealer_margin() -> f64 {
    0.12
}

fn default_mileage_penalty() -> f64 {
    0.25
}

fn default_mileage_allowance() -> f64 {
    10_000.0
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            depreciation_rates: default_depreciation_rates(),
            default_rate: default_fallback_rate(),
            dealer_margin: default_dealer_margin(),
            mileage_penalty_per_mile: default_mileage_penalty(),
            annual_mileage_allowance: default_mileage_allowance(),
        }
    }
}

impl MarketConfig {
    /// Look up the annual rate for a category, falling back to `default_rate`
    pub fn rate_for(&self, category: &str) -> f64 {
        self.depreciation_rates
            .get(category)
            .copied()
            .unwrap_or(self.default_rate)
    }

    /// Check whether a category is present in the table
    pub fn has_category(&self, category: &str) -> bool {
        self.depreciation_rates.contains_key(category)
    }

    /// Iterate categories in name order
    pub fn categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.depreciation_rates
            .iter()
            .map(|(name, rate)| (name.as_str(), *rate))
    }

    /// Validate values loaded from a settings file
    pub fn validate(&self) -> AppraisalResult<()> {
        for (name, rate) in &self.depreciation_rates {
            if !is_fraction(*rate) {
                return Err(AppraisalError::Config(format!(
                    "Depreciation rate for '{}' must be in [0, 1), got {}",
                    name, rate
                )));
            }
        }

        if !is_fraction(self.default_rate) {
            return Err(AppraisalError::Config(format!(
                "Default depreciation rate must be in [0, 1), got {}",
                self.default_rate
            )));
        }

        if !is_fraction(self.dealer_margin) {
            return Err(AppraisalError::Config(format!(
                "Dealer margin must be in [0, 1), got {}",
                self.dealer_margin
            )));
        }

        if !self.mileage_penalty_per_mile.is_finite() || self.mileage_penalty_per_mile < 0.0 {
            return Err(AppraisalError::Config(
                "Mileage penalty per mile cannot be negative".into(),
            ));
        }

        if !self.annual_mileage_allowance.is_finite() || self.annual_mileage_allowance < 0.0 {
            return Err(AppraisalError::Config(
                "Annual mileage allowance cannot be negative".into(),
            ));
        }

        Ok(())
    }
}

fn is_fraction(value: f64) -> bool {
    (0.0..1.0).contains(&value)
}
