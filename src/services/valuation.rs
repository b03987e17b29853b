//! Valuation calculator
//!
//! Estimates a trade-in value from age-based compounding depreciation, an
//! excess-mileage penalty, and the dealer margin. The computation is pure:
//! the reference year is always passed in by the caller.

use serde::{Deserialize, Serialize};

use crate::models::{MarketConfig, Money, VehicleRecord};

/// Every intermediate value of one valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationBreakdown {
    /// Category requested by the caller
    pub category: String,
    /// Whether the category was missing and the default rate was used
    pub used_default_rate: bool,
    /// Years of depreciation applied (never below 1)
    pub age: i32,
    /// Annual depreciation rate applied
    pub rate: f64,
    /// MSRP after compounding depreciation
    pub base_residual: f64,
    /// Miles allowed before a penalty applies
    pub mileage_allowance: f64,
    /// Miles over the allowance
    pub excess_miles: f64,
    /// Penalty for excess miles
    pub mileage_penalty: f64,
    /// Dealer margin taken off the adjusted residual
    pub dealer_margin: f64,
    /// Trade-in value before truncation
    pub trade_in: f64,
    /// Final value, truncated toward zero
    pub value: i64,
}

impl ValuationBreakdown {
    /// Final value as money
    pub fn money(&self) -> Money {
        Money::from_units(self.value)
    }

    /// Whether the unrounded trade-in fits in an i64 without saturating
    pub fn is_representable(&self) -> bool {
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        self.trade_in.is_finite()
            && self.trade_in >= i64::MIN as f64
            && self.trade_in < i64::MAX as f64
    }
}

/// Computes vehicle values against a fixed market configuration
#[derive(Debug, Clone, Default)]
pub struct ValuationCalculator {
    market: MarketConfig,
}

impl ValuationCalculator {
    /// Create a calculator for the given market
    pub fn new(market: MarketConfig) -> Self {
        Self { market }
    }

    /// The market this calculator values against
    pub fn market(&self) -> &MarketConfig {
        &self.market
    }

    /// Estimate the trade-in value in whole currency units
    ///
    /// Unknown categories use the market's default rate. The result is not
    /// clamped and may be negative when the mileage penalty exceeds the
    /// residual value.
    pub fn estimate_value(
        &self,
        vehicle: &VehicleRecord,
        category: &str,
        reference_year: i32,
    ) -> i64 {
        self.breakdown(vehicle, category, reference_year).value
    }

    /// Run a valuation and keep every intermediate step
    pub fn breakdown(
        &self,
        vehicle: &VehicleRecord,
        category: &str,
        reference_year: i32,
    ) -> ValuationBreakdown {
        let age = vehicle_age(vehicle.year, reference_year);
        let rate = self.market.rate_for(category);

        let base_residual = vehicle.msrp * (1.0 - rate).powf(f64::from(age));

        let mileage_allowance = self.market.annual_mileage_allowance * f64::from(age);
        let excess_miles = (vehicle.mileage - mileage_allowance).max(0.0);
        let mileage_penalty = excess_miles * self.market.mileage_penalty_per_mile;

        let trade_in = (base_residual - mileage_penalty) * (1.0 - self.market.dealer_margin);

        ValuationBreakdown {
            category: category.to_string(),
            used_default_rate: !self.market.has_category(category),
            age,
            rate,
            base_residual,
            mileage_allowance,
            excess_miles,
            mileage_penalty,
            dealer_margin: self.market.dealer_margin,
            trade_in,
            // `as` truncates toward zero
            value: trade_in as i64,
        }
    }
}

/// Years of depreciation for a model year, floored at one
///
/// Current and future model years still take one year of depreciation,
/// the value lost on driving off the lot.
pub fn vehicle_age(model_year: i32, reference_year: i32) -> i32 {
    reference_year.saturating_sub(model_year).max(1)
}
