//! YAML Export functionality
//!
//! Exports an appraisal report to YAML for human-readable records.

use crate::error::{AppraisalError, AppraisalResult};
use crate::export::json::ReportExport;
use crate::services::ScenarioReport;
use std::io::Write;

/// Export a report as YAML with a comment header
pub fn export_report_yaml<W: Write>(report: &ScenarioReport, writer: &mut W) -> AppraisalResult<()> {
    let export = ReportExport::from_report(report);
    let to_export_err = |e: std::io::Error| AppraisalError::Export(e.to_string());

    writeln!(writer, "# Vehicle Appraisal: {}", export.vehicle.label()).map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AppraisalError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleRecord;
    use crate::services::{Scenario, ValuationCalculator};

    #[test]
    fn test_yaml_export() {
        let report = ScenarioReport::generate(
            &ValuationCalculator::default(),
            &VehicleRecord::default(),
            &Scenario::default(),
            2025,
        );

        let mut buffer = Vec::new();
        export_report_yaml(&report, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# Vehicle Appraisal: 2023 Lexus RZ 450e\n"));
        assert!(yaml.contains("reference_offer: 29600"));

        let export: ReportExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(export.book.value, 40_691);
        assert_eq!(export.market.value, 21_649);
    }
}
