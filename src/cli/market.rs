//! Market and configuration CLI commands

use crate::config::{AppraisePaths, Settings};
use crate::display::format_category_table;
use crate::error::AppraisalResult;

/// Handle the categories command
pub fn handle_categories_command(settings: &Settings) -> AppraisalResult<()> {
    print!("{}", format_category_table(&settings.market));
    Ok(())
}

/// Handle the config command
pub fn handle_config_command(paths: &AppraisePaths, settings: &Settings) -> AppraisalResult<()> {
    let vehicle = &settings.vehicle;
    let scenario = &settings.scenario;

    println!("Appraise Configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created, using defaults)" }
    );
    println!("History log:      {}", paths.history_log().display());
    println!();
    println!("Vehicle:");
    println!("  {} {}", vehicle.label(), vehicle.trim);
    println!("  MSRP:    {}{:.0}", settings.currency_symbol, vehicle.msrp);
    println!("  Mileage: {:.0}", vehicle.mileage);
    println!();
    println!("Scenario:");
    println!("  Book category:   {}", scenario.book_category);
    println!("  Market category: {}", scenario.market_category);
    println!(
        "  {} offer: {}",
        scenario.offer_label,
        scenario
            .reference_offer
            .format_with_symbol(&settings.currency_symbol)
    );
    println!();
    println!(
        "Record history: {}",
        if settings.record_history { "Yes" } else { "No" }
    );

    Ok(())
}

/// Handle the init command
pub fn handle_init_command(paths: &AppraisePaths, settings: &Settings) -> AppraisalResult<()> {
    if paths.is_initialized() {
        println!(
            "Settings already exist at: {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    settings.save(paths)?;
    println!("Wrote default settings to: {}", paths.settings_file().display());
    println!();
    println!("Edit the \"vehicle\", \"scenario\" and \"market\" sections to change what");
    println!("'appraise' values by default.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_settings_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppraisePaths::with_base_dir(temp_dir.path().join("appraise"));
        let settings = Settings::default();

        handle_init_command(&paths, &settings).unwrap();
        assert!(paths.is_initialized());

        let mut changed = Settings::default();
        changed.currency_symbol = "€".into();
        handle_init_command(&paths, &changed).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
    }
}
