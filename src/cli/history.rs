//! History CLI command
//!
//! Shows valuations recorded in the history log.

use clap::Args;

use crate::config::{AppraisePaths, Settings};
use crate::error::AppraisalResult;
use crate::history::ValuationLog;

/// Arguments for the history command
#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle the history command
pub fn handle_history_command(
    paths: &AppraisePaths,
    settings: &Settings,
    args: HistoryArgs,
) -> AppraisalResult<()> {
    let log = ValuationLog::new(paths.history_log());
    let entries = log.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No valuations recorded yet.");
        if !settings.record_history {
            println!("History recording is disabled in {}", paths.settings_file().display());
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_summary(&settings.currency_symbol));
    }

    let total = log.entry_count()?;
    if total > entries.len() {
        println!();
        println!("Showing {} of {} valuations.", entries.len(), total);
    }

    Ok(())
}
