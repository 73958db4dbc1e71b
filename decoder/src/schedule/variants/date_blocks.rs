//! Date-blocks layout: day-of-month lists paired with time windows.

use gamefeed_core::{DayBlock, Schedule, TimeWindow};

use super::{VariantReader, header};
use crate::cursor::Cursor;

/// `[999999, 0, n, 0, block...]` where each block is a day count, that many
/// days, an optional single-zero separator, a window count with its pairs,
/// and another optional separator. The first block's day count doubles as
/// the header's day-count field, so a single-block header reads as
/// monthly-days instead; this layout sits last in registry order and in
/// practice receives the multi-block headers.
pub(crate) struct DateBlocksReader;

impl VariantReader for DateBlocksReader {
    fn name(&self) -> &'static str {
        "date_blocks"
    }

    fn matches(&self, segment: &[i64]) -> bool {
        header(segment, 3) == 0 && header(segment, 2) > 0 && header(segment, 4) > 0
    }

    fn read(&self, cursor: &mut Cursor<'_>) -> Option<Schedule> {
        cursor.skip(2);
        let count = cursor.next()?;
        cursor.skip(1);

        let mut blocks = Vec::new();
        for _ in 0..count.max(0) {
            let Some(day_count) = cursor.next() else {
                break;
            };
            let days = cursor.take_up_to(day_count).to_vec();
            if days.is_empty() {
                break;
            }

            // A zero after the day list is a separator; the window count
            // follows it. Without the separator the next token is the
            // count itself.
            let mut window_count = cursor.next().unwrap_or(0);
            if window_count == 0 {
                window_count = cursor.next().unwrap_or(0);
            }

            let mut windows = Vec::new();
            for _ in 0..window_count.max(0) {
                let Some((start, end)) = cursor.next_pair() else {
                    break;
                };
                windows.push(TimeWindow::new(start, end));
            }
            blocks.push(DayBlock { days, windows });

            // Optional trailing separator before the next block.
            if cursor.peek() == Some(0) {
                cursor.skip(1);
            }
        }

        if blocks.is_empty() {
            return None;
        }
        Some(Schedule::DateBlocks { blocks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(segment: &[i64]) -> Option<Schedule> {
        let mut cursor = Cursor::new(segment);
        DateBlocksReader.read(&mut cursor)
    }

    #[test]
    fn test_matches_day_count_header() {
        assert!(DateBlocksReader.matches(&[999_999, 0, 2, 0, 1, 5, 0, 1, 800, 1000, 1, 20, 0, 0]));
        // Single-block headers also satisfy the predicate; registry order
        // routes those to monthly-days before this reader is consulted.
        assert!(DateBlocksReader.matches(&[999_999, 0, 1, 0, 2, 15, 20, 0, 1, 800, 1000]));
    }

    #[test]
    fn test_rejects_zero_day_count() {
        assert!(!DateBlocksReader.matches(&[999_999, 0, 1, 0, 0, 0, 2, 800, 1000]));
    }

    #[test]
    fn test_reads_block_with_separator_and_windows() {
        assert_eq!(
            read(&[999_999, 0, 1, 0, 2, 15, 20, 0, 1, 800, 1000]),
            Some(Schedule::DateBlocks {
                blocks: vec![DayBlock {
                    days: vec![15, 20],
                    windows: vec![TimeWindow::new(800, 1000)],
                }],
            })
        );
    }

    #[test]
    fn test_reads_block_without_separator() {
        assert_eq!(
            read(&[999_999, 0, 1, 0, 2, 15, 20, 1, 800, 1000]),
            Some(Schedule::DateBlocks {
                blocks: vec![DayBlock {
                    days: vec![15, 20],
                    windows: vec![TimeWindow::new(800, 1000)],
                }],
            })
        );
    }

    #[test]
    fn test_reads_two_blocks() {
        let segment = [
            999_999, 0, 2, 0, //
            1, 5, 0, 1, 800, 1000, 0, //
            2, 15, 20, 0, 1, 2200, 2300,
        ];
        assert_eq!(
            read(&segment),
            Some(Schedule::DateBlocks {
                blocks: vec![
                    DayBlock {
                        days: vec![5],
                        windows: vec![TimeWindow::new(800, 1000)],
                    },
                    DayBlock {
                        days: vec![15, 20],
                        windows: vec![TimeWindow::new(2200, 2300)],
                    },
                ],
            })
        );
    }

    #[test]
    fn test_block_with_no_windows() {
        assert_eq!(
            read(&[999_999, 0, 1, 0, 2, 15, 20, 0]),
            Some(Schedule::DateBlocks {
                blocks: vec![DayBlock { days: vec![15, 20], windows: Vec::new() }],
            })
        );
    }

    #[test]
    fn test_missing_days_read_nothing() {
        assert_eq!(read(&[999_999, 0, 1, 0, 3]), None);
    }
}
