//! JSON Export functionality
//!
//! Exports an appraisal report to JSON with schema versioning.

use crate::error::{AppraisalError, AppraisalResult};
use crate::models::{Money, VehicleRecord};
use crate::services::{OfferVerdict, ScenarioReport, ValuationBreakdown};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serializable snapshot of a scenario report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Vehicle that was appraised
    pub vehicle: VehicleRecord,

    /// Year ages were measured against
    pub reference_year: i32,

    /// Book (optimistic) valuation
    pub book: ValuationBreakdown,

    /// Market (realistic) valuation
    pub market: ValuationBreakdown,

    /// Who made the reference offer
    pub offer_label: String,

    /// Reference offer amount
    pub reference_offer: Money,

    /// Market value minus reference offer
    pub difference: Money,

    /// Offer comparison
    pub verdict: OfferVerdict,
}

impl ReportExport {
    /// Snapshot a generated report
    pub fn from_report(report: &ScenarioReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            vehicle: report.vehicle.clone(),
            reference_year: report.reference_year,
            book: report.book.clone(),
            market: report.market.clone(),
            offer_label: report.scenario.offer_label.clone(),
            reference_offer: report.scenario.reference_offer,
            difference: report.difference,
            verdict: report.verdict,
        }
    }
}

/// Export a report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &ScenarioReport, writer: &mut W) -> AppraisalResult<()> {
    let export = ReportExport::from_report(report);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| AppraisalError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AppraisalError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Scenario, ValuationCalculator};

    fn report() -> ScenarioReport {
        ScenarioReport::generate(
            &ValuationCalculator::default(),
            &VehicleRecord::default(),
            &Scenario::default(),
            2025,
        )
    }

    #[test]
    fn test_json_export() {
        let mut buffer = Vec::new();
        export_report_json(&report(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["vehicle"]["make"], "Lexus");
        assert_eq!(value["book"]["value"], 40_691);
        assert_eq!(value["market"]["value"], 21_649);
        assert_eq!(value["reference_offer"], 29_600);
        assert_eq!(value["difference"], -7_951);
        assert_eq!(value["verdict"]["verdict"], "overpaying");
        assert_eq!(value["verdict"]["amount"], 7_951);
    }

    #[test]
    fn test_json_reads_back() {
        let mut buffer = Vec::new();
        export_report_json(&report(), &mut buffer).unwrap();

        let export: ReportExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(export.reference_year, 2025);
        assert_eq!(export.market.category, "Luxury_EV");
        assert_eq!(export.market.age, 2);
    }
}
