//! Time-windows layout: daily windows with no date or weekday component.

use gamefeed_core::{Schedule, TimeWindow};

use super::{VariantReader, header};
use crate::cursor::Cursor;

/// `[999999, 0, 1, 0, 0, 0, count, start, end, ...]` — structurally a
/// single weekly block whose weekday-mask slot (index 5) is empty.
pub(crate) struct TimeWindowsReader;

impl VariantReader for TimeWindowsReader {
    fn name(&self) -> &'static str {
        "time_windows"
    }

    fn matches(&self, segment: &[i64]) -> bool {
        header(segment, 2) == 1
            && header(segment, 3) == 0
            && header(segment, 4) == 0
            && header(segment, 5) == 0
            && header(segment, 6) > 0
    }

    fn read(&self, cursor: &mut Cursor<'_>) -> Option<Schedule> {
        // Skip the header and the empty mask slot.
        cursor.skip(6);
        let count = cursor.next()?;

        let mut windows = Vec::new();
        for _ in 0..count.max(0) {
            let Some((start, end)) = cursor.next_pair() else {
                break;
            };
            windows.push(TimeWindow::new(start, end));
        }

        if windows.is_empty() {
            return None;
        }
        Some(Schedule::TimeWindows { windows })
    }
}
