//! Weekly layout: weekday-mask blocks, optionally with windows.

use gamefeed_core::{Schedule, TimeWindow, WeekdayBlock};

use super::{VariantReader, header};
use crate::cursor::Cursor;

/// `[999999, 0, n, 0, 0, mask, count, start, end, ..., (0, 0)?]` repeated
/// per block. The non-empty mask slot at index 5 is what separates this
/// layout from the time-windows one.
pub(crate) struct WeeklyReader;

impl VariantReader for WeeklyReader {
    fn name(&self) -> &'static str {
        "weekly"
    }

    fn matches(&self, segment: &[i64]) -> bool {
        header(segment, 3) == 0
            && header(segment, 4) == 0
            && header(segment, 2) > 0
            && header(segment, 5) != 0
    }

    fn read(&self, cursor: &mut Cursor<'_>) -> Option<Schedule> {
        cursor.skip(2);
        let count = cursor.next()?;
        cursor.skip(2);

        let mut blocks = Vec::new();
        for _ in 0..count.max(0) {
            let Some(weekdays) = cursor.next() else {
                break;
            };
            if weekdays == 0 {
                break;
            }

            let window_count = cursor.next().unwrap_or(0);
            let mut windows = Vec::new();
            for _ in 0..window_count.max(0) {
                let Some((start, end)) = cursor.next_pair() else {
                    break;
                };
                windows.push(TimeWindow::new(start, end));
            }
            blocks.push(WeekdayBlock { weekdays, windows });

            // Optional trailing separator between blocks.
            if cursor.peek() == Some(0) && cursor.peek_at(1) == Some(0) {
                cursor.skip(2);
            }
        }

        if blocks.is_empty() {
            return None;
        }
        Some(Schedule::Weekly { blocks })
    }
}
