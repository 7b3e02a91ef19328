//! CLI argument definitions for the inflammation toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "inflammation",
    version,
    about = "Analyse patient inflammation data",
    long_about = "Analyse patient inflammation data.\n\n\
                  Computes per-day statistics and per-patient normalisation over\n\
                  CSV tables, and manages patient observation records stored as JSON."
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

    /// Allow patient names to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print per-day mean, maximum and minimum for each CSV table.
    Analyse(AnalyseArgs),

    /// Print a table with every patient scaled by their own maximum.
    Normalise(NormaliseArgs),

    /// Manage patient observation records.
    #[command(subcommand)]
    Patients(PatientsCommand),
}

#[derive(Parser)]
pub struct AnalyseArgs {
    /// Inflammation CSV files (one patient per row, one day per column).
    #[arg(value_name = "CSV", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct NormaliseArgs {
    /// Inflammation CSV file.
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Print the table as JSON instead of a formatted grid.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum PatientsCommand {
    /// Create a patient record file from a CSV table.
    FromCsv(FromCsvArgs),

    /// List the patients stored in a record file.
    Show(ShowArgs),

    /// Append an observation to a patient, creating the patient if needed.
    Add(AddArgs),
}

#[derive(Parser)]
pub struct FromCsvArgs {
    /// Inflammation CSV file.
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Destination JSON file (overwritten if it exists).
    #[arg(long = "output", short = 'o', value_name = "JSON")]
    pub output: PathBuf,

    /// Name prefix; patients are named "<PREFIX> <row number>".
    #[arg(long = "prefix", default_value = "Patient")]
    pub prefix: String,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Patient record file.
    #[arg(value_name = "JSON")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Patient record file (created if missing).
    #[arg(value_name = "JSON")]
    pub file: PathBuf,

    /// Patient name.
    #[arg(long = "name")]
    pub name: String,

    /// Inflammation reading.
    #[arg(long = "value")]
    pub value: f64,

    /// Study day; defaults to the day after the patient's last observation.
    #[arg(long = "day")]
    pub day: Option<u32>,
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
