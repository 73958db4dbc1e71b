//! Monthly-days layout: fixed days of every month, no time component.

use gamefeed_core::Schedule;

use super::{VariantReader, header};
use crate::cursor::Cursor;

/// `[999999, 0, 1, 0, count, day...]` — a single block whose day count is
/// positive. Multi-block day headers belong to the date-blocks layout,
/// which is tested last in registry order precisely because its header
/// shape contains this one.
pub(crate) struct MonthlyDaysReader;

impl VariantReader for MonthlyDaysReader {
    fn name(&self) -> &'static str {
        "monthly_days"
    }

    fn matches(&self, segment: &[i64]) -> bool {
        header(segment, 2) == 1 && header(segment, 3) == 0 && header(segment, 4) > 0
    }

    fn read(&self, cursor: &mut Cursor<'_>) -> Option<Schedule> {
        cursor.skip(4);
        let count = cursor.next()?;
        let days = cursor.take_up_to(count).to_vec();
        if days.is_empty() {
            return None;
        }
        Some(Schedule::MonthlyDays { days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(segment: &[i64]) -> Option<Schedule> {
        let mut cursor = Cursor::new(segment);
        MonthlyDaysReader.read(&mut cursor)
    }

    #[test]
    fn test_matches_single_block_day_header() {
        assert!(MonthlyDaysReader.matches(&[999_999, 0, 1, 0, 2, 15, 20]));
    }

    #[test]
    fn test_rejects_zero_day_count() {
        assert!(!MonthlyDaysReader.matches(&[999_999, 0, 1, 0, 0]));
    }

    #[test]
    fn test_rejects_multi_block_header() {
        assert!(!MonthlyDaysReader.matches(&[999_999, 0, 2, 0, 2, 15, 20]));
    }

    #[test]
    fn test_rejects_alternate_range_flag() {
        assert!(!MonthlyDaysReader.matches(&[999_999, 0, 1, 1, 2, 15, 20]));
    }

    #[test]
    fn test_reads_day_list() {
        assert_eq!(
            read(&[999_999, 0, 1, 0, 2, 15, 20]),
            Some(Schedule::MonthlyDays { days: vec![15, 20] })
        );
    }

    #[test]
    fn test_trailing_row_data_is_ignored() {
        // The segment runs to the end of the row, so a trailing ID run can
        // sit after the day list; the count bounds the read.
        assert_eq!(
            read(&[999_999, 0, 1, 0, 2, 15, 20, 0, 150, 1200, 0]),
            Some(Schedule::MonthlyDays { days: vec![15, 20] })
        );
    }

    #[test]
    fn test_truncated_day_list_reads_partially() {
        assert_eq!(
            read(&[999_999, 0, 1, 0, 5, 15]),
            Some(Schedule::MonthlyDays { days: vec![15] })
        );
    }

    #[test]
    fn test_missing_day_list_reads_nothing() {
        assert_eq!(read(&[999_999, 0, 1, 0, 5]), None);
    }
}
