//! CSV Export functionality
//!
//! Writes one row per report line (book value, market value, offer) for
//! spreadsheets.

use crate::error::{AppraisalError, AppraisalResult};
use crate::services::{ScenarioReport, ValuationBreakdown};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Line")]
    line: &'a str,
    #[serde(rename = "Vehicle")]
    vehicle: &'a str,
    #[serde(rename = "Category")]
    category: Option<&'a str>,
    #[serde(rename = "Rate")]
    rate: Option<f64>,
    #[serde(rename = "Age")]
    age: Option<i32>,
    #[serde(rename = "Residual")]
    residual: Option<String>,
    #[serde(rename = "Mileage Penalty")]
    mileage_penalty: Option<String>,
    #[serde(rename = "Value")]
    value: i64,
}

impl<'a> CsvRow<'a> {
    fn valuation(line: &'a str, vehicle: &'a str, breakdown: &'a ValuationBreakdown) -> Self {
        Self {
            line,
            vehicle,
            category: Some(breakdown.category.as_str()),
            rate: Some(breakdown.rate),
            age: Some(breakdown.age),
            residual: Some(format!("{:.2}", breakdown.base_residual)),
            mileage_penalty: Some(format!("{:.2}", breakdown.mileage_penalty)),
            value: breakdown.value,
        }
    }
}

/// Export a report as CSV
pub fn export_report_csv<W: Write>(report: &ScenarioReport, writer: W) -> AppraisalResult<()> {
    let vehicle = report.vehicle.label();
    let offer_line = format!("{} offer", report.scenario.offer_label);

    let rows = [
        CsvRow::valuation("Book value", &vehicle, &report.book),
        CsvRow::valuation("Market value", &vehicle, &report.market),
        CsvRow {
            line: &offer_line,
            vehicle: &vehicle,
            category: None,
            rate: None,
            age: None,
            residual: None,
            mileage_penalty: None,
            value: report.scenario.reference_offer.units(),
        },
        CsvRow {
            line: "Difference",
            vehicle: &vehicle,
            category: None,
            rate: None,
            age: None,
            residual: None,
            mileage_penalty: None,
            value: report.difference.units(),
        },
    ];

    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for row in &rows {
        csv_writer
            .serialize(row)
            .map_err(|e| AppraisalError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| AppraisalError::Export(e.to_string()))?;

    Ok(())
}
