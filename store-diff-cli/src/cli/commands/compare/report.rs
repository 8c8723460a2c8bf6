//! Rendering of a comparison result

use anyhow::{Context, Result};
use colored::*;

use super::OutputFormat;
use crate::api::SourceLabel;
use crate::diff::FinalResult;

/// Render `result` in the requested format
pub fn format_report(result: &FinalResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(result)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to format JSON output")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(result).context("Failed to format JSON output")
        }
        OutputFormat::Csv => format_csv(result),
    }
}

fn format_table(result: &FinalResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} ({})\n",
        "Stores missing from the other source".bold(),
        result.stores.len()
    ));
    if result.stores.is_empty() {
        out.push_str(&format!("  {}\n", "none".dimmed()));
    } else {
        let id_width = result
            .stores
            .iter()
            .map(|s| s.store_id.as_str().chars().count())
            .chain(std::iter::once("STORE ID".len()))
            .max()
            .unwrap_or(0);

        out.push_str(&format!(
            "  {}  {}\n",
            format!("{:<width$}", "STORE ID", width = id_width).underline(),
            "MISSING FROM".underline()
        ));
        for store in &result.stores {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                store.store_id.as_str(),
                label(store.missing_from),
                width = id_width
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "{} ({})\n",
        "Mock fields missing from prod".bold(),
        result.fields.len()
    ));
    if result.fields.is_empty() {
        out.push_str(&format!("  {}\n", "none".dimmed()));
    } else {
        for field in &result.fields {
            out.push_str(&format!("  {}\n", field));
        }
    }

    out
}

fn label(source: SourceLabel) -> ColoredString {
    match source {
        SourceLabel::Mock => source.as_str().yellow(),
        SourceLabel::Prod => source.as_str().red(),
    }
}

fn format_csv(result: &FinalResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(["kind", "name", "missing_from"])
        .context("Failed to write CSV header")?;

    for store in &result.stores {
        wtr.write_record(["store", store.store_id.as_str(), store.missing_from.as_str()])
            .with_context(|| format!("Failed to write store: {}", store.store_id))?;
    }
    for field in &result.fields {
        wtr.write_record(["field", field.as_str(), SourceLabel::Prod.as_str()])
            .with_context(|| format!("Failed to write field: {}", field))?;
    }

    let bytes = wtr.into_inner().context("Failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}
