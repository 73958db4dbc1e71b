//! Field-range validation for decoded schedules.
//!
//! The decoder never rejects a segment for carrying out-of-range values —
//! the feed is an externally-owned, reverse-engineered format, and decode
//! must stay total. Validation is a separate, non-failing pass that reports
//! every suspicious field so callers can gate on data quality.

use thiserror::Error;

use crate::format::PERMANENT_DATE;
use crate::types::{Schedule, TimeWindow};

/// A single out-of-range field in a decoded schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Day-of-month outside 1–31.
    #[error("day of month {0} out of range 1-31")]
    DayOutOfRange(i64),

    /// Weekday bitmask outside the seven weekday bits.
    #[error("weekday mask {0} out of range 1-127")]
    WeekdayMaskOutOfRange(i64),

    /// Packed time outside 0000–2400.
    #[error("time value {0} out of range 0000-2400")]
    TimeOutOfRange(i64),

    /// Packed date with an impossible month or day component.
    #[error("date value {0} has out-of-range components")]
    DateOutOfRange(i64),

    /// Descriptor carries no blocks, periods, days, or windows at all.
    #[error("schedule has no content")]
    Empty,
}

/// Validates every field of a decoded schedule, returning all problems
/// found. An empty vector means the descriptor is well-formed.
///
/// # Examples
///
/// ```
/// use gamefeed_core::{Schedule, validate_schedule};
///
/// let good = Schedule::MonthlyDays { days: vec![15, 20] };
/// assert!(validate_schedule(&good).is_empty());
///
/// let bad = Schedule::MonthlyDays { days: vec![32] };
/// assert_eq!(validate_schedule(&bad).len(), 1);
/// ```
pub fn validate_schedule(schedule: &Schedule) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match schedule {
        Schedule::MonthlyDays { days } => {
            if days.is_empty() {
                errors.push(ValidationError::Empty);
            }
            check_days(days, &mut errors);
        }
        Schedule::TimeWindows { windows } => {
            if windows.is_empty() {
                errors.push(ValidationError::Empty);
            }
            check_windows(windows, &mut errors);
        }
        Schedule::DatePeriods { periods } => {
            if periods.is_empty() {
                errors.push(ValidationError::Empty);
            }
            for period in periods {
                check_date(period.start_date, &mut errors);
                check_date(period.end_date, &mut errors);
                check_time(period.start_time, &mut errors);
                check_time(period.end_time, &mut errors);
                check_windows(&period.windows, &mut errors);
            }
        }
        Schedule::Weekly { blocks } => {
            if blocks.is_empty() {
                errors.push(ValidationError::Empty);
            }
            for block in blocks {
                if !(1..=127).contains(&block.weekdays) {
                    errors.push(ValidationError::WeekdayMaskOutOfRange(block.weekdays));
                }
                check_windows(&block.windows, &mut errors);
            }
        }
        Schedule::DateBlocks { blocks } => {
            if blocks.is_empty() {
                errors.push(ValidationError::Empty);
            }
            for block in blocks {
                check_days(&block.days, &mut errors);
                check_windows(&block.windows, &mut errors);
            }
        }
    }

    errors
}

fn check_days(days: &[i64], errors: &mut Vec<ValidationError>) {
    for &day in days {
        if !(1..=31).contains(&day) {
            errors.push(ValidationError::DayOutOfRange(day));
        }
    }
}

fn check_time(value: i64, errors: &mut Vec<ValidationError>) {
    // 2400 appears in the feed as an inclusive end-of-day marker.
    if !(0..=2400).contains(&value) || value % 100 >= 60 {
        errors.push(ValidationError::TimeOutOfRange(value));
    }
}

fn check_windows(windows: &[TimeWindow], errors: &mut Vec<ValidationError>) {
    for window in windows {
        check_time(window.start, errors);
        check_time(window.end, errors);
    }
}

fn check_date(value: i64, errors: &mut Vec<ValidationError>) {
    if value == PERMANENT_DATE {
        return;
    }
    let month = (value / 100) % 100;
    let day = value % 100;
    if value < 1900_01_01 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        errors.push(ValidationError::DateOutOfRange(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DatePeriod, DayBlock, WeekdayBlock};

    #[test]
    fn test_valid_schedule_has_no_errors() {
        let schedule = Schedule::DatePeriods {
            periods: vec![DatePeriod {
                start_date: 2024_03_01,
                start_time: 800,
                end_date: PERMANENT_DATE,
                end_time: 2400,
                windows: vec![TimeWindow::new(1100, 1300)],
            }],
        };
        assert!(validate_schedule(&schedule).is_empty());
    }

    #[test]
    fn test_day_out_of_range() {
        let schedule = Schedule::MonthlyDays { days: vec![0, 15, 32] };
        let errors = validate_schedule(&schedule);
        assert_eq!(
            errors,
            vec![
                ValidationError::DayOutOfRange(0),
                ValidationError::DayOutOfRange(32),
            ]
        );
    }

    #[test]
    fn test_weekday_mask_out_of_range() {
        let schedule = Schedule::Weekly {
            blocks: vec![WeekdayBlock { weekdays: 128, windows: Vec::new() }],
        };
        assert_eq!(
            validate_schedule(&schedule),
            vec![ValidationError::WeekdayMaskOutOfRange(128)]
        );
    }

    #[test]
    fn test_time_out_of_range() {
        let schedule = Schedule::TimeWindows {
            windows: vec![TimeWindow::new(2500, 970)],
        };
        let errors = validate_schedule(&schedule);
        assert_eq!(
            errors,
            vec![
                ValidationError::TimeOutOfRange(2500),
                ValidationError::TimeOutOfRange(970),
            ]
        );
    }

    #[test]
    fn test_bad_date_components() {
        let schedule = Schedule::DateBlocks {
            blocks: vec![DayBlock { days: vec![1], windows: Vec::new() }],
        };
        assert!(validate_schedule(&schedule).is_empty());

        let schedule = Schedule::DatePeriods {
            periods: vec![DatePeriod {
                start_date: 2024_13_05,
                start_time: 0,
                end_date: 2024_03_99,
                end_time: 0,
                windows: Vec::new(),
            }],
        };
        assert_eq!(validate_schedule(&schedule).len(), 2);
    }

    #[test]
    fn test_empty_descriptor_flagged() {
        let schedule = Schedule::Weekly { blocks: Vec::new() };
        assert_eq!(validate_schedule(&schedule), vec![ValidationError::Empty]);
    }
}
