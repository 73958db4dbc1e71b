//! Structured decode reporting for whole feed documents.

use serde::{Deserialize, Serialize};

use crate::{RowDecode, decode_feed};

/// Per-row decode report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowReport {
    /// Zero-based index of the row in the source document, counting only
    /// rows that survived normalization.
    pub row: usize,
    pub ids: Vec<i64>,
    /// Label of the schedule layout that won classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Rendered schedule text; empty when the row carries none.
    pub schedule: String,
    pub warnings: Vec<String>,
}

/// Batch report for one feed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedReportBundle {
    pub generated_at: String,
    pub version: String,
    pub rows: Vec<RowReport>,
    /// Rows discarded during normalization (blank lines).
    pub discarded_rows: usize,
}

/// Decodes every row of a feed document into a timestamped report bundle.
pub fn build_feed_report(text: &str) -> FeedReportBundle {
    let total_lines = text.lines().count();
    let decoded = decode_feed(text);
    let discarded_rows = total_lines - decoded.len();

    let rows = decoded
        .into_iter()
        .enumerate()
        .map(|(row, decode)| row_report(row, decode))
        .collect();

    FeedReportBundle {
        generated_at: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rows,
        discarded_rows,
    }
}

fn row_report(row: usize, decode: RowDecode) -> RowReport {
    RowReport {
        row,
        ids: decode.ids,
        variant: decode
            .schedule
            .as_ref()
            .map(|schedule| schedule.variant_label().to_string()),
        schedule: decode.schedule_text,
        warnings: decode.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_counts_discarded_rows() {
        let text = "150\t1200\t0\n\t\t\n999999\t0\t1\t0\t2\t15\t20\n";
        let bundle = build_feed_report(text);
        assert_eq!(bundle.rows.len(), 2);
        assert_eq!(bundle.discarded_rows, 1);
    }

    #[test]
    fn test_rows_carry_variant_labels() {
        let text = "999999\t0\t1\t0\t2\t15\t20\n150\t1200\t0\n";
        let bundle = build_feed_report(text);

        assert_eq!(bundle.rows[0].variant.as_deref(), Some("monthly_days"));
        assert_eq!(bundle.rows[0].schedule, "15,20日");

        assert!(bundle.rows[1].variant.is_none());
        assert_eq!(bundle.rows[1].ids, vec![150, 1200]);
    }

    #[test]
    fn test_bundle_serializes_without_none_variant() {
        let bundle = build_feed_report("150\t0\n");
        let json = serde_json::to_string(&bundle).unwrap();
        assert!(!json.contains("\"variant\""));
        assert!(json.contains("\"generated_at\""));
    }
}
