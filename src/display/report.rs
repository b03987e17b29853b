//! Appraisal report formatting
//!
//! Formats scenario comparisons and single valuations for terminal output.

use crate::models::{Money, VehicleRecord};
use crate::services::{OfferVerdict, ScenarioReport, ValuationBreakdown};

/// Format the book/market/offer comparison
pub fn format_scenario_report(report: &ScenarioReport, currency_symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(currency_symbol);
    let label = &report.scenario.offer_label;

    let mut output = String::new();

    output.push_str(&format!(
        "--- Appraisal for {} (as of {}) ---\n",
        report.vehicle.label(),
        report.reference_year
    ));
    output.push_str(&format!(
        "Fantasy Book Value ({} Market): {}\n",
        report.scenario.book_category,
        money(report.book_value())
    ));
    output.push_str(&format!(
        "Realistic Trade-In Floor ({} Market): {}\n",
        report.scenario.market_category,
        money(report.market_value())
    ));

    output.push('\n');
    output.push_str(&format!(
        "vs Your {} Offer: {}\n",
        label,
        money(report.scenario.reference_offer)
    ));

    match report.verdict {
        OfferVerdict::Overpaying(amount) => {
            output.push_str(&format!("{} is OVERPAYING by {}\n", label, money(amount)));
        }
        OfferVerdict::Underpaying(amount) => {
            output.push_str(&format!("{} is UNDERPAYING by {}\n", label, money(amount)));
        }
    }

    output
}

/// Format one valuation step by step
pub fn format_breakdown(
    vehicle: &VehicleRecord,
    breakdown: &ValuationBreakdown,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Valuation: {} ({})\n",
        vehicle.label(),
        breakdown.category
    ));
    if !vehicle.trim.is_empty() {
        output.push_str(&format!("  Trim:              {}\n", vehicle.trim));
    }
    output.push_str(&format!("  MSRP:              {}{:.2}\n", currency_symbol, vehicle.msrp));
    output.push_str(&format!(
        "  Age:               {} year{}\n",
        breakdown.age,
        if breakdown.age == 1 { "" } else { "s" }
    ));
    output.push_str(&format!(
        "  Depreciation rate: {:.1}%{}\n",
        breakdown.rate * 100.0,
        if breakdown.used_default_rate {
            " (default, unknown category)"
        } else {
            ""
        }
    ));
    output.push_str(&format!(
        "  Residual value:    {}{:.2}\n",
        currency_symbol, breakdown.base_residual
    ));
    output.push_str(&format!(
        "  Mileage:           {:.0} mi (allowance {:.0} mi)\n",
        vehicle.mileage, breakdown.mileage_allowance
    ));
    output.push_str(&format!(
        "  Excess miles:      {:.0} mi\n",
        breakdown.excess_miles
    ));
    output.push_str(&format!(
        "  Mileage penalty:   {}{:.2}\n",
        currency_symbol, breakdown.mileage_penalty
    ));
    output.push_str(&format!(
        "  Dealer margin:     {:.1}%\n",
        breakdown.dealer_margin * 100.0
    ));
    output.push_str(&format!(
        "  Trade-in value:    {}\n",
        breakdown.money().format_with_symbol(currency_symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Scenario, ValuationCalculator};

    fn default_report(offer: i64) -> ScenarioReport {
        let scenario = Scenario {
            reference_offer: Money::from_units(offer),
            ..Scenario::default()
        };
        ScenarioReport::generate(
            &ValuationCalculator::default(),
            &VehicleRecord::default(),
            &scenario,
            2025,
        )
    }

    #[test]
    fn test_overpaying_report() {
        let output = format_scenario_report(&default_report(29_600), "$");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "--- Appraisal for 2023 Lexus RZ 450e (as of 2025) ---");
        assert_eq!(lines[1], "Fantasy Book Value (Standard Market): $40,691");
        assert_eq!(lines[2], "Realistic Trade-In Floor (Luxury_EV Market): $21,649");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "vs Your Carvana Offer: $29,600");
        assert_eq!(lines[5], "Carvana is OVERPAYING by $7,951");
    }

    #[test]
    fn test_underpaying_report() {
        let output = format_scenario_report(&default_report(20_000), "$");
        assert!(output.ends_with("Carvana is UNDERPAYING by $1,649\n"));
    }

    #[test]
    fn test_breakdown_output() {
        let vehicle = VehicleRecord::default();
        let breakdown = ValuationCalculator::default().breakdown(&vehicle, "Luxury_EV", 2025);
        let output = format_breakdown(&vehicle, &breakdown, "$");

        assert!(output.starts_with("Valuation: 2023 Lexus RZ 450e (Luxury_EV)\n"));
        assert!(output.contains("Age:               2 years"));
        assert!(output.contains("Depreciation rate: 38.0%\n"));
        assert!(output.contains("Residual value:    $24601.60"));
        assert!(output.contains("Dealer margin:     12.0%"));
        assert!(output.contains("Trade-in value:    $21,649"));
    }

    #[test]
    fn test_breakdown_marks_default_rate() {
        let vehicle = VehicleRecord::default();
        let breakdown = ValuationCalculator::default().breakdown(&vehicle, "Classic", 2025);
        let output = format_breakdown(&vehicle, &breakdown, "$");

        assert!(output.contains("20.0% (default, unknown category)"));
    }
}
