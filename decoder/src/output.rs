//! Output formatting for decoded rows and reports.

use std::collections::BTreeMap;

use gamefeed_core::render::format_event_label;

use crate::RowDecode;
use crate::report::FeedReportBundle;

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Text,
}

/// Formats decoded rows in the requested output format.
///
/// The text format prints one block per row: the label line for each
/// trailing ID (names resolved against the caller's table) followed by the
/// schedule text when present.
pub fn format_rows(
    rows: &[RowDecode],
    names: &BTreeMap<i64, String>,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(rows).map_err(|e| format!("JSON serialization failed: {e}"))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(rows).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(rows_to_text(rows, names)),
    }
}

/// Formats a report bundle in the requested output format.
pub fn format_report(bundle: &FeedReportBundle, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(bundle)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(bundle).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(report_to_text(bundle)),
    }
}

fn rows_to_text(rows: &[RowDecode], names: &BTreeMap<i64, String>) -> String {
    let mut out = String::new();

    for decode in rows {
        for &id in &decode.ids {
            out.push_str(&format_event_label(id, names));
            out.push('\n');
        }
        if !decode.schedule_text.is_empty() {
            out.push_str(&decode.schedule_text);
            out.push('\n');
        }
    }

    out
}

fn report_to_text(bundle: &FeedReportBundle) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "feed report {} ({} rows, {} discarded)\n",
        bundle.generated_at,
        bundle.rows.len(),
        bundle.discarded_rows
    ));

    for row in &bundle.rows {
        out.push_str(&format!(
            "row {}: ids={:?} variant={} schedule={}\n",
            row.row,
            row.ids,
            row.variant.as_deref().unwrap_or("-"),
            if row.schedule.is_empty() { "-" } else { row.schedule.as_str() },
        ));
        for warning in &row.warnings {
            out.push_str(&format!("  warning: {warning}\n"));
        }
    }

    out
}
