//! CLI argument definitions for the unifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "unifier",
    version,
    about = "Unify messy spreadsheets into long-format tables",
    long_about = "Locate the table inside each sheet of a workbook or CSV file, classify its\n\
                  columns and melt per-location columns into (location, value) records.\n\n\
                  Supports CSV, XLS, XLSX, XLSM, XLSB and ODS inputs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Write logs to a timestamped file in this directory.
    #[arg(
        long = "log-dir",
        value_name = "DIR",
        global = true,
        conflicts_with = "log_file"
    )]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a file, or every file in a folder, into long-format CSV.
    Process(ProcessArgs),

    /// Show the located table, context and column roles of each sheet.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// File or folder to process.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for `<name>.csv` files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "processed")]
    pub output_dir: PathBuf,

    /// Process and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// JSON file with normalization options.
    #[arg(long = "options", value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Name of the column holding the source sheet.
    #[arg(long = "sheet-column", value_name = "NAME")]
    pub sheet_column: Option<String>,

    /// Name of the column holding melted location names.
    #[arg(long = "locations-column", value_name = "NAME")]
    pub locations_column: Option<String>,

    /// Name of the value column when no `Total ...` column names it.
    #[arg(long = "value-column", value_name = "NAME")]
    pub value_column: Option<String>,

    /// Keep records whose value is zero.
    #[arg(long = "keep-zero-values")]
    pub keep_zero_values: bool,

    /// Number of sample rows to print per file (0 disables the sample).
    #[arg(long = "sample-rows", value_name = "N", default_value_t = 3)]
    pub sample_rows: usize,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Workbook or CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON file with normalization options.
    #[arg(long = "options", value_name = "FILE")]
    pub options: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
