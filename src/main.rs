use anyhow::Result;
use clap::{Parser, Subcommand};

use appraise::cli::{
    handle_appraise_command, handle_categories_command, handle_config_command,
    handle_estimate_command, handle_export_command, handle_history_command, handle_init_command,
    AppraiseArgs, EstimateArgs, ExportArgs, HistoryArgs,
};
use appraise::config::{AppraisePaths, Settings};

#[derive(Parser)]
#[command(
    name = "appraise",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based vehicle trade-in appraisal calculator",
    long_about = "Appraise estimates a vehicle's trade-in value from its MSRP, age and \
                  mileage, then compares an optimistic book value and a realistic \
                  market value against an offer you have received. Run with no \
                  arguments to appraise the vehicle in your settings."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare book and market values against a reference offer
    Appraise(AppraiseArgs),

    /// Estimate the value under a single depreciation category
    #[command(alias = "value")]
    Estimate(EstimateArgs),

    /// List depreciation categories and market constants
    #[command(alias = "market")]
    Categories,

    /// Show recorded valuations
    #[command(alias = "log")]
    History(HistoryArgs),

    /// Export the appraisal report as JSON, YAML or CSV
    Export(ExportArgs),

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppraisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Appraise(args)) => handle_appraise_command(&paths, &settings, args)?,
        Some(Commands::Estimate(args)) => handle_estimate_command(&paths, &settings, args)?,
        Some(Commands::Categories) => handle_categories_command(&settings)?,
        Some(Commands::History(args)) => handle_history_command(&paths, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&settings, args)?,
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        None => handle_appraise_command(&paths, &settings, AppraiseArgs::default())?,
    }

    Ok(())
}
