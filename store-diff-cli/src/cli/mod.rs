//! Command-line interface definition

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigOverrides, parse_query_pair};
use commands::compare::CompareCommands;

#[derive(Parser)]
#[command(name = "store-diff")]
#[command(about = "Compare store records between a mock and a production API")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "STORE_DIFF_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare the mock and prod sources and report the differences
    Compare(CompareCommands),
    /// Print the effective configuration as TOML
    Config {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

/// Source settings that override the config file
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Prefix for both source locations (empty: use locations as-is)
    #[arg(long = "base", env = "STORE_DIFF_BASE")]
    pub base_location: Option<String>,

    /// Location of the mock source (URL or file path)
    #[arg(long, env = "STORE_DIFF_MOCK")]
    pub mock: Option<String>,

    /// Location of the production source (URL or file path)
    #[arg(long, env = "STORE_DIFF_PROD")]
    pub prod: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "STORE_DIFF_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Query parameter added to both requests (repeatable)
    #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_query_pair)]
    pub query: Vec<(String, String)>,
}

impl SourceArgs {
    pub fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            base_location: self.base_location,
            mock: self.mock,
            prod: self.prod,
            timeout_secs: self.timeout,
            query: self.query,
        }
    }
}
