use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Nerdyversary finder.
#[derive(Parser)]
#[command(
    name = "nerdyversary",
    version,
    about = "Find dates whose distance to a special day is a nice combination of mathematical constants"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Scan a date range for nerdyversaries.
    Search(SearchArgs),
    /// List the expressions matching a single duration.
    Construct(ConstructArgs),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Date of the special day in ISO format.
    #[arg(short = 'd', long)]
    pub special_day: Option<NaiveDate>,

    /// Date when to start the search, in ISO format. Defaults to today.
    #[arg(short, long)]
    pub start: Option<NaiveDate>,

    /// Date when to end the search, in ISO format. Defaults to the start
    /// plus 365 days.
    #[arg(short, long)]
    pub end: Option<NaiveDate>,

    /// Largest exponent to consider for building the expressions.
    #[arg(long)]
    pub max_power: Option<u32>,

    /// Largest multiple of a symbol that is accepted.
    #[arg(long)]
    pub factor_lim: Option<u64>,

    /// Match tolerance in days.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Comma-separated symbols to build expressions from (pi, e, phi).
    #[arg(long, value_delimiter = ',')]
    pub symbols: Option<Vec<String>>,

    /// Output table format (simple, github, csv).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `construct` subcommand.
#[derive(clap::Args)]
pub struct ConstructArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target duration in years.
    #[arg(short, long)]
    pub years: Option<f64>,

    /// Target duration in days.
    #[arg(short, long)]
    pub days: Option<i64>,

    /// Stop at the first matching expression instead of listing all.
    #[arg(long)]
    pub first: bool,

    /// Largest exponent to consider for building the expressions.
    #[arg(long)]
    pub max_power: Option<u32>,

    /// Largest multiple of a symbol that is accepted.
    #[arg(long)]
    pub factor_lim: Option<u64>,

    /// Match tolerance in days.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Comma-separated symbols to build expressions from (pi, e, phi).
    #[arg(long, value_delimiter = ',')]
    pub symbols: Option<Vec<String>>,

    /// Output table format (simple, github, csv).
    #[arg(short, long)]
    pub format: Option<String>,
}
