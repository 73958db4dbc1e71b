//! Date-periods layout: explicit date ranges, optionally with windows.

use gamefeed_core::{DatePeriod, SEGMENT_SENTINEL, Schedule, TimeWindow};
use tracing::warn;

use super::{VariantReader, header};
use crate::cursor::Cursor;

/// Window sub-block pair count accepted by the appended `(0, 0, count)`
/// marker. Counts other than this (or zero) mark a malformed block.
const SUB_BLOCK_WINDOWS: i64 = 3;

/// `[999999, 0, n, 1, period...]` where each period is an optional leading
/// `999999` marker, four integers `(start_date, start_time, end_date,
/// end_time)`, then an optional `(0, 0, count)` window sub-block.
///
/// A malformed sub-block is recovery, not failure: the period keeps its
/// dates, loses its windows, and the reader resynchronizes at the next
/// sentinel token.
pub(crate) struct DatePeriodsReader;

impl VariantReader for DatePeriodsReader {
    fn name(&self) -> &'static str {
        "date_periods"
    }

    fn matches(&self, segment: &[i64]) -> bool {
        header(segment, 3) == 1 && header(segment, 2) > 0
    }

    fn read(&self, cursor: &mut Cursor<'_>) -> Option<Schedule> {
        cursor.skip(2);
        let count = cursor.next()?;
        cursor.skip(1);

        let mut periods = Vec::new();
        for _ in 0..count.max(0) {
            // Optional leading marker, with or without its paired zero.
            if cursor.peek() == Some(SEGMENT_SENTINEL) {
                cursor.skip(1);
                if cursor.peek() == Some(0) {
                    cursor.skip(1);
                }
            }

            if cursor.remaining() < 4 {
                break;
            }
            let start_date = cursor.next()?;
            let start_time = cursor.next()?;
            let end_date = cursor.next()?;
            let end_time = cursor.next()?;

            let windows = read_sub_block(cursor);

            periods.push(DatePeriod {
                start_date,
                start_time,
                end_date,
                end_time,
                windows,
            });
        }

        if periods.is_empty() {
            return None;
        }
        Some(Schedule::DatePeriods { periods })
    }
}

/// Consumes the optional `(0, 0, count)` window sub-block after a period's
/// date range, returning its windows. Resynchronizes to the next sentinel
/// on a malformed count.
fn read_sub_block(cursor: &mut Cursor<'_>) -> Vec<TimeWindow> {
    if cursor.peek() != Some(0) || cursor.peek_at(1) != Some(0) {
        return Vec::new();
    }

    let Some(count) = cursor.peek_at(2) else {
        // Bare trailing (0, 0) separator at segment end.
        cursor.skip(2);
        return Vec::new();
    };
    cursor.skip(3);

    if count == 0 {
        return Vec::new();
    }
    if count != SUB_BLOCK_WINDOWS {
        warn!(count, pos = cursor.pos(), "malformed window sub-block, resyncing");
        cursor.resync_to_sentinel();
        return Vec::new();
    }

    let mut windows = Vec::new();
    for _ in 0..count {
        let Some((start, end)) = cursor.next_pair() else {
            break;
        };
        windows.push(TimeWindow::new(start, end));
    }
    windows
}
