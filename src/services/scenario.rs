//! Scenario comparison
//!
//! Values one vehicle under an optimistic "book" category and a realistic
//! market category, then compares the realistic value against a reference
//! offer.

use serde::{Deserialize, Serialize};

use crate::models::market::{LUXURY_EV, STANDARD};
use crate::models::{Money, VehicleRecord};

use super::valuation::{ValuationBreakdown, ValuationCalculator};

/// The categories and offer a report compares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Category for the optimistic book value
    #[serde(default = "default_book_category")]
    pub book_category: String,

    /// Category for the realistic market value
    #[serde(default = "default_market_category")]
    pub market_category: String,

    /// Offer received for the vehicle
    #[serde(default = "default_reference_offer")]
    pub reference_offer: Money,

    /// Who made the offer, used in output
    #[serde(default = "default_offer_label")]
    pub offer_label: String,
}

fn default_book_category() -> String {
    STANDARD.to_string()
}

fn default_market_category() -> String {
    LUXURY_EV.to_string()
}

fn default_reference_offer() -> Money {
    Money::from_units(29_600)
}

fn default_offer_label() -> String {
    "Carvana".to_string()
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            book_category: default_book_category(),
            market_category: default_market_category(),
            reference_offer: default_reference_offer(),
            offer_label: default_offer_label(),
        }
    }
}

/// How the reference offer compares to the realistic estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "amount", rename_all = "snake_case")]
pub enum OfferVerdict {
    /// The offer exceeds the estimate by this amount
    Overpaying(Money),
    /// The offer is at or below the estimate by this amount
    Underpaying(Money),
}

impl OfferVerdict {
    /// Classify the signed difference `estimate - offer`
    pub fn from_difference(difference: Money) -> Self {
        if difference.is_negative() {
            Self::Overpaying(difference.abs())
        } else {
            Self::Underpaying(difference)
        }
    }

    /// The unsigned amount of the gap
    pub fn amount(&self) -> Money {
        match self {
            Self::Overpaying(amount) | Self::Underpaying(amount) => *amount,
        }
    }
}

/// Result of comparing book and market values against an offer
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Vehicle that was valued
    pub vehicle: VehicleRecord,
    /// Year ages were measured against
    pub reference_year: i32,
    /// Scenario that was run
    pub scenario: Scenario,
    /// Valuation under the book category
    pub book: ValuationBreakdown,
    /// Valuation under the market category
    pub market: ValuationBreakdown,
    /// Market value minus the reference offer
    pub difference: Money,
    /// Offer comparison
    pub verdict: OfferVerdict,
}

impl ScenarioReport {
    /// Run both valuations and compare against the offer
    pub fn generate(
        calculator: &ValuationCalculator,
        vehicle: &VehicleRecord,
        scenario: &Scenario,
        reference_year: i32,
    ) -> Self {
        let book = calculator.breakdown(vehicle, &scenario.book_category, reference_year);
        let market = calculator.breakdown(vehicle, &scenario.market_category, reference_year);

        let difference = market.money() - scenario.reference_offer;

        Self {
            vehicle: vehicle.clone(),
            reference_year,
            scenario: scenario.clone(),
            book,
            market,
            difference,
            verdict: OfferVerdict::from_difference(difference),
        }
    }

    /// Book (optimistic) value
    pub fn book_value(&self) -> Money {
        self.book.money()
    }

    /// Market (realistic) value
    pub fn market_value(&self) -> Money {
        self.market.money()
    }
}
