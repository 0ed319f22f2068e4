//! CLI argument definitions for the field CRM tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use url::Url;

use fieldcrm_model::DictionaryKind;

#[derive(Parser)]
#[command(
    name = "fieldcrm",
    version,
    about = "Field CRM - export objects to CSV and bulk-import them back",
    long_about = "Export site objects to a semicolon separated CSV file and bulk-create\n\
                  objects from CSV files through the CRM API.\n\n\
                  Import accepts English or Russian headers and human readable labels\n\
                  for object types and statuses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow contact names and phone numbers to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write an object list (JSON from the API) as an export CSV.
    Export(ExportArgs),

    /// Create objects from a CSV file.
    Import(ImportArgs),

    /// Show the label dictionaries.
    Labels(LabelsArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// JSON file with an array of objects or an API page response.
    #[arg(value_name = "OBJECTS_JSON")]
    pub input: PathBuf,

    /// Exact output file. Overrides --output-dir.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory for the dated export file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// CSV file to import (UTF-8 or Windows-1251).
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Base URL of the CRM API.
    #[arg(long = "api-url", env = "FIELDCRM_API_URL", value_name = "URL")]
    pub api_url: Option<Url>,

    /// Bearer token for the CRM API.
    #[arg(
        long = "token",
        env = "FIELDCRM_API_TOKEN",
        hide_env_values = true,
        value_name = "TOKEN"
    )]
    pub token: Option<String>,

    /// Parse and validate rows without calling the API.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Rewrite contact phones to +7XXXXXXXXXX where possible.
    #[arg(long = "normalize-phones")]
    pub normalize_phones: bool,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// With --dry-run, write the payloads as JSON lines to this file.
    #[arg(long = "emit", value_name = "PATH", requires = "dry_run")]
    pub emit: Option<PathBuf>,
}

#[derive(Parser)]
pub struct LabelsArgs {
    /// Only show one dictionary.
    #[arg(long = "kind", value_enum)]
    pub kind: Option<DictionaryKindArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DictionaryKindArg {
    ObjectType,
    ObjectStatus,
    VisitStatus,
    Interest,
    Role,
}

impl From<DictionaryKindArg> for DictionaryKind {
    fn from(value: DictionaryKindArg) -> Self {
        match value {
            DictionaryKindArg::ObjectType => DictionaryKind::ObjectType,
            DictionaryKindArg::ObjectStatus => DictionaryKind::ObjectStatus,
            DictionaryKindArg::VisitStatus => DictionaryKind::VisitStatus,
            DictionaryKindArg::Interest => DictionaryKind::Interest,
            DictionaryKindArg::Role => DictionaryKind::Role,
        }
    }
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
