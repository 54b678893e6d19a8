//! CLI argument definitions for the dataset cleaning toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dclean",
    version,
    about = "Dataset cleaning toolkit - inspect and clean tabular CSV data",
    long_about = "Load a CSV dataset, inspect its missing values, clean it\n\
                  (placeholder normalization, row-mean imputation, row/column\n\
                  removal, column renaming), and export the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a CSV file and report its shape, column types, and missing values.
    Inspect(InspectArgs),

    /// Run the cleaning pipeline over a CSV file and export the result.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Placeholder token to treat as missing (normalized before analysis).
    #[arg(long = "placeholder", value_name = "TOKEN", default_value = "..")]
    pub placeholder: String,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path for the cleaned CSV.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "PATH",
        default_value = "cleaned_dataset.csv"
    )]
    pub output: PathBuf,

    /// Placeholder token to treat as missing (normalized before analysis).
    #[arg(long = "placeholder", value_name = "TOKEN", default_value = "..")]
    pub placeholder: String,

    /// How to fill missing values.
    #[arg(long = "impute", value_enum, default_value = "none")]
    pub impute: ImputeArg,

    /// Drop rows or columns that contain missing values.
    #[arg(long = "drop-missing", value_enum, default_value = "none")]
    pub drop_missing: DropArg,

    /// Columns to remove by name (unknown names are an error).
    #[arg(
        long = "remove-columns",
        value_name = "NAME",
        num_args = 1..,
        value_delimiter = ','
    )]
    pub remove_columns: Vec<String>,

    /// 1-based row positions to keep; all other rows are discarded.
    ///
    /// An empty or entirely out-of-range selection is a warning and
    /// leaves the rows untouched.
    #[arg(
        long = "keep-rows",
        value_name = "ROW",
        num_args = 1..,
        value_delimiter = ','
    )]
    pub keep_rows: Option<Vec<usize>>,

    /// Simplify year-range column names ("2014 [YR2014]" -> "2014").
    #[arg(long = "simplify-names")]
    pub simplify_names: bool,

    /// Report what would change without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI imputation mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ImputeArg {
    None,
    RowMean,
}

/// CLI drop mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DropArg {
    None,
    Rows,
    Columns,
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
