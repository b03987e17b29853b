//! Appraisal CLI commands
//!
//! Runs the book/market comparison and single-category estimates, taking
//! the vehicle and scenario from settings with optional flag overrides.

use chrono::Datelike;
use clap::Args;

use crate::config::{AppraisePaths, Settings};
use crate::display::{format_breakdown, format_scenario_report};
use crate::error::{AppraisalError, AppraisalResult};
use crate::history::{ValuationEntry, ValuationLog};
use crate::models::{Money, VehicleRecord};
use crate::services::{Scenario, ScenarioReport, ValuationBreakdown, ValuationCalculator};

/// Vehicle overrides; unset fields come from settings
#[derive(Args, Debug, Default, Clone)]
pub struct VehicleArgs {
    /// Manufacturer
    #[arg(long)]
    pub make: Option<String>,
    /// Model name
    #[arg(long)]
    pub model: Option<String>,
    /// Model year
    #[arg(long)]
    pub model_year: Option<i32>,
    /// Trim level
    #[arg(long)]
    pub trim: Option<String>,
    /// Original MSRP
    #[arg(long)]
    pub msrp: Option<f64>,
    /// Current odometer reading
    #[arg(long)]
    pub mileage: Option<f64>,
}

impl VehicleArgs {
    /// Apply overrides on top of a base vehicle
    pub fn apply(&self, base: &VehicleRecord) -> VehicleRecord {
        let mut vehicle = base.clone();
        if let Some(make) = &self.make {
            vehicle.make = make.clone();
        }
        if let Some(model) = &self.model {
            vehicle.model = model.clone();
        }
        if let Some(year) = self.model_year {
            vehicle.year = year;
        }
        if let Some(trim) = &self.trim {
            vehicle.trim = trim.clone();
        }
        if let Some(msrp) = self.msrp {
            vehicle.msrp = msrp;
        }
        if let Some(mileage) = self.mileage {
            vehicle.mileage = mileage;
        }
        vehicle
    }
}

/// Arguments for the book/market comparison
#[derive(Args, Debug, Default, Clone)]
pub struct AppraiseArgs {
    #[command(flatten)]
    pub vehicle: VehicleArgs,

    /// Reference offer to compare against (e.g., "29600" or "$29,600")
    #[arg(long, value_parser = parse_money)]
    pub offer: Option<Money>,

    /// Who made the offer
    #[arg(long)]
    pub offer_label: Option<String>,

    /// Category for the optimistic book value
    #[arg(long)]
    pub book: Option<String>,

    /// Category for the realistic market value
    #[arg(long)]
    pub market: Option<String>,

    /// Year to measure vehicle age against (defaults to the current year)
    #[arg(long)]
    pub as_of: Option<i32>,
}

impl AppraiseArgs {
    /// Apply overrides on top of the configured scenario
    pub fn scenario(&self, base: &Scenario) -> Scenario {
        let mut scenario = base.clone();
        if let Some(offer) = self.offer {
            scenario.reference_offer = offer;
        }
        if let Some(label) = &self.offer_label {
            scenario.offer_label = label.clone();
        }
        if let Some(book) = &self.book {
            scenario.book_category = book.clone();
        }
        if let Some(market) = &self.market {
            scenario.market_category = market.clone();
        }
        scenario
    }

    /// Build the report these arguments describe
    pub fn generate_report(&self, settings: &Settings) -> AppraisalResult<ScenarioReport> {
        let vehicle = self.vehicle.apply(&settings.vehicle);
        vehicle.validate()?;

        let calculator = ValuationCalculator::new(settings.market.clone());
        let scenario = self.scenario(&settings.scenario);

        let report = ScenarioReport::generate(
            &calculator,
            &vehicle,
            &scenario,
            reference_year(self.as_of),
        );
        ensure_representable(&report.book)?;
        ensure_representable(&report.market)?;

        Ok(report)
    }
}

/// Arguments for a single-category estimate
#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub vehicle: VehicleArgs,

    /// Depreciation category (unknown categories use the default rate)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Year to measure vehicle age against (defaults to the current year)
    #[arg(long)]
    pub as_of: Option<i32>,

    /// Show every step of the calculation
    #[arg(short, long)]
    pub detail: bool,
}

fn ensure_representable(breakdown: &ValuationBreakdown) -> AppraisalResult<()> {
    if breakdown.is_representable() {
        return Ok(());
    }

    Err(AppraisalError::Validation(format!(
        "{} valuation of {:.0} is outside the range of whole-unit amounts; check msrp and mileage",
        breakdown.category, breakdown.trade_in
    )))
}

fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// Resolve the reference year, reading the clock only when none is given
pub fn reference_year(as_of: Option<i32>) -> i32 {
    as_of.unwrap_or_else(|| chrono::Local::now().year())
}

fn record(
    paths: &AppraisePaths,
    settings: &Settings,
    vehicle: &VehicleRecord,
    breakdowns: &[&ValuationBreakdown],
    reference_year: i32,
) -> AppraisalResult<()> {
    if !settings.record_history {
        return Ok(());
    }

    let entries: Vec<ValuationEntry> = breakdowns
        .iter()
        .map(|b| ValuationEntry::record(vehicle, b, reference_year))
        .collect();

    ValuationLog::new(paths.history_log()).log_batch(&entries)
}

/// Handle the appraise command
pub fn handle_appraise_command(
    paths: &AppraisePaths,
    settings: &Settings,
    args: AppraiseArgs,
) -> AppraisalResult<()> {
    let report = args.generate_report(settings)?;

    print!(
        "{}",
        format_scenario_report(&report, &settings.currency_symbol)
    );

    record(
        paths,
        settings,
        &report.vehicle,
        &[&report.book, &report.market],
        report.reference_year,
    )
}

/// Handle the estimate command
pub fn handle_estimate_command(
    paths: &AppraisePaths,
    settings: &Settings,
    args: EstimateArgs,
) -> AppraisalResult<()> {
    let vehicle = args.vehicle.apply(&settings.vehicle);
    vehicle.validate()?;

    let category = args
        .category
        .unwrap_or_else(|| settings.scenario.market_category.clone());
    let year = reference_year(args.as_of);

    let calculator = ValuationCalculator::new(settings.market.clone());
    let breakdown = calculator.breakdown(&vehicle, &category, year);
    ensure_representable(&breakdown)?;

    if args.detail {
        print!(
            "{}",
            format_breakdown(&vehicle, &breakdown, &settings.currency_symbol)
        );
    } else {
        println!(
            "{} ({}, as of {}): {}",
            vehicle.label(),
            category,
            year,
            breakdown.money().format_with_symbol(&settings.currency_symbol)
        );
    }

    record(paths, settings, &vehicle, &[&breakdown], year)
}
