mod api;
mod cli;
mod config;
mod diff;
mod services;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // .env must be loaded before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Compare(args) => {
            cli::commands::compare::handle_compare_command(args, config_path).await
        }
        Commands::Config { sources } => {
            cli::commands::config::handle_config_command(sources, config_path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
