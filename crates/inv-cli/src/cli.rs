//! CLI argument definitions for the inventory toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "inv",
    version,
    about = "Inventory item report toolkit",
    long_about = "Analyze a JSON inventory export.\n\n\
                  Prints item counts, a preview of the first records, the type\n\
                  distribution, and keyword matches; the filter command removes\n\
                  keyword-matching items and writes the document back."
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
    /// Analyze an inventory file and print a report.
    Report(ReportArgs),

    /// Remove keyword-matching items and write the filtered document.
    Filter(FilterArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the inventory JSON file.
    #[arg(value_name = "FILE", default_value = "friend.json")]
    pub path: PathBuf,

    /// Search keyword (repeatable; replaces the built-in list).
    #[arg(long = "keyword", value_name = "TEXT")]
    pub keywords: Vec<String>,

    /// What part of each record keywords are matched against.
    ///
    /// `record` searches the whole serialized record, which means a keyword
    /// can also hit unrelated fields such as numeric IDs. `name` restricts
    /// matching to the name field.
    #[arg(long = "scope", value_enum, default_value = "record")]
    pub scope: SearchScopeArg,
}

#[derive(Parser)]
pub struct FilterArgs {
    /// Path to the inventory JSON file.
    #[arg(value_name = "FILE", default_value = "friend.json")]
    pub path: PathBuf,

    /// Removal keyword (repeatable; replaces the built-in list).
    #[arg(long = "keyword", value_name = "TEXT")]
    pub keywords: Vec<String>,

    /// Write the filtered document here instead of overwriting FILE.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report what would be removed without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SearchScopeArg {
    Record,
    Name,
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
