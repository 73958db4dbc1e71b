//! Offline decoding of game event feed rows.
//!
//! This crate turns raw tab-separated feed rows into structured data: the
//! run of entity IDs trailing each row, and the embedded schedule segment
//! decoded into a [`Schedule`] descriptor with rendered display text. The
//! feed's line layout is an externally-owned, reverse-engineered format —
//! decoding is total and degrades to partial or empty output instead of
//! failing.
//!
//! # Main entry points
//!
//! - [`decode_line`] — normalize and decode a single feed row.
//! - [`decode_feed`] — decode a whole document, rows in parallel.
//! - [`report::build_feed_report`] — decode with full per-row diagnostics.
//! - The pipeline stages ([`row`], [`ids`], [`segment`], [`schedule`]) are
//!   public for callers that need a single step.
//!
//! # Example
//!
//! ```
//! use gamefeed_decoder::decode_line;
//!
//! let decoded = decode_line("150\t1200\t999999\t0\t1\t0\t2\t15\t20\t0").unwrap();
//! assert_eq!(decoded.ids, Vec::<i64>::new());
//! assert_eq!(decoded.schedule_text, "15,20日");
//!
//! let decoded = decode_line("7\t150\t1200\t0").unwrap();
//! assert_eq!(decoded.ids, vec![150, 1200]);
//! assert!(decoded.schedule.is_none());
//! ```

pub mod cursor;
pub mod feed;
pub mod gacha;
pub mod ids;
pub mod output;
pub mod report;
pub mod row;
pub mod schedule;
pub mod segment;
pub mod version;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use gamefeed_core::Schedule;

/// Decoded content of one feed row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowDecode {
    /// Trailing entity IDs, in row order.
    pub ids: Vec<i64>,
    /// Decoded schedule descriptor, when the row embeds one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    /// Rendered schedule text; empty when no schedule was recognized.
    pub schedule_text: String,
    /// Decoder diagnostics for this row.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Decodes one raw feed line.
///
/// Returns `None` for rows discarded during normalization (blank lines).
/// Never fails on content: malformed cells are skipped on the ID path and
/// zeroed on the schedule path.
pub fn decode_line(line: &str) -> Option<RowDecode> {
    let cells = row::normalize_row(line)?;

    let ids = ids::extract_ids(&row::numeric_tokens(&cells));

    let positional = row::positional_tokens(&cells);
    let (schedule, schedule_text, warnings) = match segment::locate_segment(&positional) {
        Some(located) => {
            let mut decoder = schedule::SegmentDecoder::new(located);
            let schedule = decoder.decode();
            let text = schedule
                .as_ref()
                .map(Schedule::render)
                .unwrap_or_default();
            (schedule, text, decoder.warnings().to_vec())
        }
        None => (None, String::new(), Vec::new()),
    };

    Some(RowDecode {
        ids,
        schedule,
        schedule_text,
        warnings,
    })
}

/// Decodes every row of a feed document, in parallel, preserving row
/// order. Rows discarded during normalization are dropped from the output.
pub fn decode_feed(text: &str) -> Vec<RowDecode> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .par_iter()
        .filter_map(|line| decode_line(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line_extracts_trailing_ids() {
        let decoded = decode_line("20240301\t7\t150\t1200\t0").unwrap();
        assert_eq!(decoded.ids, vec![150, 1200]);
        assert!(decoded.schedule.is_none());
        assert_eq!(decoded.schedule_text, "");
    }

    #[test]
    fn test_decode_line_blank_row_is_none() {
        assert!(decode_line("\t\t").is_none());
    }

    #[test]
    fn test_decode_line_full_row() {
        let line = "20240301\t0\t20240401\t0\t0\t0\t999999\t0\t1\t0\t2\t15\t20";
        let decoded = decode_line(line).unwrap();
        assert_eq!(decoded.schedule_text, "15,20日");
    }

    #[test]
    fn test_decode_line_zero_count_header_is_harmless() {
        // Monthly header with a zero day count: no schedule, no crash.
        let line = "20240301\t0\t20240401\t0\t0\t0\t999999\t0\t1\t0\t0";
        let decoded = decode_line(line).unwrap();
        assert!(decoded.schedule.is_none());
        assert_eq!(decoded.schedule_text, "");
    }

    #[test]
    fn test_decode_line_uses_last_sentinel_pair() {
        let line = "999999\t0\t1\t0\t2\t999999\t0\t1\t0\t0\t9\t1\t800\t1000";
        let decoded = decode_line(line).unwrap();
        assert_eq!(decoded.schedule_text, "日・水 08:00~10:00");
    }

    #[test]
    fn test_decode_line_malformed_cells_degrade() {
        // Non-numeric cells: dropped on the ID path, zeroed in segments.
        let line = "junk\t150\t1200\t0";
        let decoded = decode_line(line).unwrap();
        assert_eq!(decoded.ids, vec![150, 1200]);
    }

    #[test]
    fn test_decode_feed_preserves_row_order() {
        let text = "150\t0\n\t\t\n1200\t0\n";
        let rows = decode_feed(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ids, vec![150]);
        assert_eq!(rows[1].ids, vec![1200]);
    }
}
