//! Market table display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::MarketConfig;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Annual Rate")]
    rate: String,
    #[tabled(rename = "Retained After 5 Yrs")]
    retained: String,
}

impl CategoryRow {
    fn new(name: &str, rate: f64) -> Self {
        Self {
            name: name.to_string(),
            rate: format!("{:.1}%", rate * 100.0),
            retained: format!("{:.1}%", (1.0 - rate).powi(5) * 100.0),
        }
    }
}

/// Format the depreciation table and adjustment constants
pub fn format_category_table(market: &MarketConfig) -> String {
    let rows: Vec<CategoryRow> = market
        .categories()
        .map(|(name, rate)| CategoryRow::new(name, rate))
        .collect();

    let mut output = String::new();

    if rows.is_empty() {
        output.push_str("No depreciation categories configured.\n");
    } else {
        output.push_str(&Table::new(rows).with(Style::psql()).to_string());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!(
        "Unknown categories use {:.1}% per year.\n",
        market.default_rate * 100.0
    ));
    output.push_str(&format!(
        "Mileage allowance: {:.0} mi/year, penalty {:.2} per excess mile.\n",
        market.annual_mileage_allowance, market.mileage_penalty_per_mile
    ));
    output.push_str(&format!(
        "Dealer margin: {:.1}%\n",
        market.dealer_margin * 100.0
    ));

    output
}
