pub mod add;
pub mod backup;
pub mod delete;
pub mod demo;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod restore;
pub mod status;
pub mod suggest;

use std::io::{self, Write};

use clap::{Parser, Subcommand};

use crate::error::{OutlayError, Result};

#[derive(Parser)]
#[command(name = "outlay", about = "Personal expense tracker with spending analytics.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up Outlay: choose a data directory and initialize the database.
    Init {
        /// Path for Outlay data (default: ~/Documents/outlay)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a new expense.
    Add {
        /// Amount spent, e.g. 12.50
        amount: f64,
        /// Date of the expense: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Category (default: suggested from the description)
        #[arg(long)]
        category: Option<String>,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Suggest a category for a description without recording anything.
    Suggest {
        description: String,
    },
    /// List recorded expenses.
    List {
        /// Start of an inclusive date range: YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// End of an inclusive date range: YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
        /// Show at most this many records, newest first
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete an expense by id.
    Delete {
        id: i64,
    },
    /// Run spending analytics.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Export expenses to a CSV spreadsheet.
    Export {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        /// Output path (default: <data_dir>/exports/expenses-YYYY-MM-DD.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Write a JSON backup of the full ledger.
    Backup {
        /// Output path (default: <data_dir>/backups/outlay-YYYYMMDD-HHMMSS.json)
        #[arg(long)]
        output: Option<String>,
    },
    /// Replace the entire ledger with the contents of a backup file.
    Restore {
        /// Path to a backup file produced by `outlay backup`
        file: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show the data directory and summary statistics.
    Status,
    /// Load a small sample ledger to explore Outlay.
    Demo,
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly spending totals.
    Monthly {
        #[arg(long)]
        json: bool,
    },
    /// Total spending per category.
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Dense month-by-category table of totals.
    Pivot {
        #[arg(long)]
        json: bool,
    },
    /// Project the spending trend forward.
    Forecast {
        /// Months to project
        #[arg(long, default_value_t = crate::forecast::DEFAULT_HORIZON)]
        horizon: usize,
        #[arg(long)]
        json: bool,
    },
    /// Flag expenses with unusual amounts.
    Anomalies {
        #[arg(long, default_value_t = crate::anomaly::DEFAULT_SEED)]
        seed: u64,
        /// Expected fraction of unusual records
        #[arg(long, default_value_t = crate::anomaly::DEFAULT_CONTAMINATION)]
        contamination: f64,
        #[arg(long)]
        json: bool,
    },
}

/// Require both range bounds or neither, matching the store's inclusive
/// BETWEEN filter.
pub(crate) fn parse_range(
    from: &Option<String>,
    to: &Option<String>,
) -> Result<Option<(String, String)>> {
    match (from, to) {
        (Some(f), Some(t)) => Ok(Some((f.clone(), t.clone()))),
        (Some(_), None) => Err(OutlayError::Validation(
            "--from requires --to (both date boundaries must be specified)".to_string(),
        )),
        (None, Some(_)) => Err(OutlayError::Validation(
            "--to requires --from (both date boundaries must be specified)".to_string(),
        )),
        (None, None) => Ok(None),
    }
}

pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
