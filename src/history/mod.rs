//! Valuation history
//!
//! Every valuation the CLI runs is appended to a line-delimited JSON log
//! (`valuations.log`). The calculator itself stays pure; callers record
//! results through `ValuationLog`.
//!
//! # Example
//!
//! ```rust,ignore
//! use appraise::history::{ValuationEntry, ValuationLog};
//!
//! let log = ValuationLog::new(paths.history_log());
//! let breakdown = calculator.breakdown(&vehicle, "Luxury_EV", 2025);
//! log.log(&ValuationEntry::record(&vehicle, &breakdown, 2025))?;
//! ```

mod entry;
mod logger;

pub use entry::ValuationEntry;
pub use logger::ValuationLog;
