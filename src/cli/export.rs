//! Export CLI command
//!
//! Writes the appraisal report to a file or stdout in JSON, YAML or CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{AppraisalError, AppraisalResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml};

use super::appraise::AppraiseArgs;

/// Supported export formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Arguments for the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scenario: AppraiseArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file (prints to stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> AppraisalResult<()> {
    let report = args.scenario.generate_report(settings)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                AppraisalError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(args.format, &report, &mut writer)?;
            writer
                .flush()
                .map_err(|e| AppraisalError::Export(e.to_string()))?;
            println!("Exported appraisal to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_report(args.format, &report, &mut handle)?;
        }
    }

    Ok(())
}

fn write_report<W: Write>(
    format: ExportFormat,
    report: &crate::services::ScenarioReport,
    writer: &mut W,
) -> AppraisalResult<()> {
    match format {
        ExportFormat::Json => export_report_json(report, writer),
        ExportFormat::Yaml => export_report_yaml(report, writer),
        ExportFormat::Csv => export_report_csv(report, writer),
    }
}
