//! Schedule segment decoding.
//!
//! A located segment decodes in two stages, kept deliberately separate:
//! classification picks exactly one of the five layout readers by testing
//! header predicates in a fixed order (first match wins, later variants are
//! never consulted), and the matched reader walks the segment through a
//! bounds-checked cursor into a [`Schedule`] descriptor. Rendering the
//! descriptor is the core crate's job; [`decode_schedule`] composes the two
//! for callers that only want text.
//!
//! Decoding is total: truncated or unrecognized segments produce partial
//! descriptors or nothing, never a panic.

mod variants;

use gamefeed_core::{SEGMENT_SENTINEL, Schedule};
use tracing::debug;

use crate::cursor::Cursor;

/// Decoder for one schedule segment, carrying diagnostics for reports.
pub struct SegmentDecoder<'a> {
    segment: &'a [i64],
    matched_variant: Option<&'static str>,
    warnings: Vec<String>,
}

impl<'a> SegmentDecoder<'a> {
    /// Creates a decoder over a segment located by
    /// [`locate_segment`](crate::segment::locate_segment).
    pub fn new(segment: &'a [i64]) -> Self {
        Self {
            segment,
            matched_variant: None,
            warnings: Vec::new(),
        }
    }

    /// Classifies and reads the segment into a descriptor.
    ///
    /// Returns `None` when the segment does not open with the sentinel
    /// pair, no layout header matches, or the matched layout is too short
    /// to produce any content.
    pub fn decode(&mut self) -> Option<Schedule> {
        if self.segment.first() != Some(&SEGMENT_SENTINEL) || self.segment.get(1) != Some(&0) {
            self.warnings
                .push("segment does not begin with the sentinel pair".to_string());
            return None;
        }

        for reader in variants::registry() {
            if !reader.matches(self.segment) {
                continue;
            }
            // First match wins; the segment is never retried against a
            // later variant, even when reading comes up empty.
            self.matched_variant = Some(reader.name());
            debug!(variant = reader.name(), len = self.segment.len(), "matched schedule layout");

            let mut cursor = Cursor::new(self.segment);
            let schedule = reader.read(&mut cursor);
            if schedule.is_none() {
                self.warnings.push(format!(
                    "layout {} matched but the segment had no readable content",
                    reader.name()
                ));
            }
            return schedule;
        }

        self.warnings
            .push("no schedule layout matches the segment header".to_string());
        None
    }

    /// Name of the layout that won classification, if any.
    pub fn matched_variant(&self) -> Option<&'static str> {
        self.matched_variant
    }

    /// Diagnostics accumulated while decoding.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Decodes a segment into a descriptor without diagnostics.
pub fn parse_schedule(segment: &[i64]) -> Option<Schedule> {
    SegmentDecoder::new(segment).decode()
}

/// Decodes a segment straight to display text.
///
/// The empty string means "no recognized schedule" — a normal outcome for
/// rows without schedule data, not an error.
///
/// # Examples
///
/// ```
/// use gamefeed_decoder::schedule::decode_schedule;
///
/// assert_eq!(decode_schedule(&[999_999, 0, 1, 0, 2, 15, 20]), "15,20日");
/// assert_eq!(decode_schedule(&[999_999, 0, 1, 0, 0]), "");
/// assert_eq!(decode_schedule(&[1, 2, 3]), "");
/// ```
pub fn decode_schedule(segment: &[i64]) -> String {
    parse_schedule(segment)
        .map(|schedule| schedule.render())
        .unwrap_or_default()
}
