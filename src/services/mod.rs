//! Service layer for the appraisal tool
//!
//! The valuation calculator and the scenario comparison built on top of it.

pub mod scenario;
pub mod valuation;

pub use scenario::{OfferVerdict, Scenario, ScenarioReport};
pub use valuation::{vehicle_age, ValuationBreakdown, ValuationCalculator};
