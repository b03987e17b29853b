//! Appraise - terminal vehicle trade-in appraisal
//!
//! Estimates what a vehicle is worth on trade-in from its MSRP, age and
//! mileage, and compares an optimistic "book" value and a realistic market
//! value against an offer you have received.
//!
//! # Architecture
//!
//! - `config`: Base directory and settings file
//! - `error`: Custom error types
//! - `models`: Vehicle, market parameters, money
//! - `services`: Valuation calculator and scenario comparison
//! - `display`: Terminal formatting
//! - `history`: Append-only valuation log
//! - `export`: JSON, YAML and CSV report export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use appraise::models::VehicleRecord;
//! use appraise::services::ValuationCalculator;
//!
//! let vehicle = VehicleRecord::new("Lexus", "RZ 450e", 2023, "Luxury", 64_000.0, 12_500.0);
//! let calculator = ValuationCalculator::default();
//! assert_eq!(calculator.estimate_value(&vehicle, "Luxury_EV", 2025), 21_649);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod history;
pub mod models;
pub mod services;

pub use error::AppraisalError;
