//! Compare command

pub mod handler;
pub mod report;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::cli::SourceArgs;

pub use handler::handle_compare_command;

#[derive(Args, Debug)]
pub struct CompareCommands {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Exit with status 2 when any difference is found
    #[arg(long)]
    pub fail_on_diff: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
    /// CSV rows of kind,name,missing_from
    Csv,
}
