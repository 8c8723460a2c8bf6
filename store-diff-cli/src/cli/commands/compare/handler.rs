//! Compare command handler

use anyhow::{Context, Result};
use colored::*;
use is_terminal::IsTerminal;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::CompareCommands;
use super::report::format_report;
use crate::api::{ClientConfig, SourceClient};
use crate::config::Config;
use crate::services::comparison::compare_sources;

/// Exit status used with `--fail-on-diff` when differences were found
const DIFF_FOUND: u8 = 2;

/// Run the comparison and write the report
pub async fn handle_compare_command(
    args: CompareCommands,
    config_path: Option<&Path>,
) -> Result<ExitCode> {
    if args.no_color || args.output.is_some() || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut config = Config::load(config_path)?;
    config.apply_overrides(args.sources.into_overrides());
    config.validate()?;

    log::info!(
        "Comparing mock '{}' with prod '{}' (base '{}')",
        config.sources.mock,
        config.sources.prod,
        config.base_location
    );

    let client = SourceClient::new(ClientConfig::from_config(&config))?;
    let result = match compare_sources(&client, &config.sources).await {
        Ok(result) => result,
        Err(err) => {
            log::debug!("Comparison aborted by the {} source", err.source_label());
            return Err(err).context("Comparison aborted");
        }
    };

    let report = format_report(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &report)
            .with_context(|| format!("Failed to write output to: {}", output_path.display()))?;
        eprintln!(
            "Report saved to: {}",
            output_path.display().to_string().bright_green()
        );
    } else {
        print!("{}", report);
        if !report.ends_with('\n') {
            println!();
        }
    }

    if args.fail_on_diff && !result.is_empty() {
        return Ok(ExitCode::from(DIFF_FOUND));
    }
    Ok(ExitCode::SUCCESS)
}
