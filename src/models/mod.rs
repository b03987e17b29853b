//! Core data models for the appraisal tool
//!
//! The vehicle being appraised, the market parameters that drive the
//! valuation, and the whole-unit money type results are reported in.

pub mod ids;
pub mod market;
pub mod money;
pub mod vehicle;

pub use ids::AppraisalId;
pub use market::{DepreciationTable, MarketConfig};
pub use money::Money;
pub use vehicle::VehicleRecord;
