//! Schedule descriptor types for the event feed encoding.
//!
//! This module defines the data model for decoded recurrence rules. A row's
//! embedded schedule segment decodes into exactly one [`Schedule`] variant;
//! rendering that descriptor back to text is handled separately in
//! [`render`](crate::render). The types are designed for serialization with
//! [`serde`] and round-trip through JSON and YAML.

use serde::{Deserialize, Serialize};

/// First token of the two-token marker that opens a schedule segment.
pub const SEGMENT_SENTINEL: i64 = 999_999;

/// Returns whether `value` is a valid event ID.
///
/// The feed packs entity IDs into three disjoint numeric bands. Everything
/// outside these bands is control data, counts, or dates.
///
/// # Examples
///
/// ```
/// use gamefeed_core::is_event_id;
///
/// assert!(is_event_id(55));
/// assert!(is_event_id(150));
/// assert!(is_event_id(1200));
/// assert!(!is_event_id(7));
/// assert!(!is_event_id(200));
/// ```
pub fn is_event_id(value: i64) -> bool {
    (50..=60).contains(&value) || (100..=199).contains(&value) || value >= 1000
}

/// A start/end pair of packed `HHMM` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// One dated period: packed `YYYYMMDD` dates with packed `HHMM` boundary
/// times, plus any time windows appended to the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    pub start_date: i64,
    pub start_time: i64,
    pub end_date: i64,
    pub end_time: i64,
    /// Sub-windows active within the period. Empty when the period has no
    /// appended window block.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<TimeWindow>,
}

/// One weekly block: a weekday bitmask plus the windows active on those days.
///
/// Bits flag Sunday (1) through Saturday (64) independently; a mask may set
/// several days at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayBlock {
    pub weekdays: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<TimeWindow>,
}

/// One date block: explicit days of the month plus their time windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBlock {
    pub days: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<TimeWindow>,
}

/// A decoded schedule: the semantic content of one embedded segment.
///
/// The five layouts are mutually exclusive; classification happens once,
/// in the decoder, over a fixed predicate order. Rendering is a
/// deterministic projection of this descriptor — see
/// [`Schedule::render`](crate::render).
///
/// # Examples
///
/// ```
/// use gamefeed_core::Schedule;
///
/// let schedule = Schedule::MonthlyDays { days: vec![15, 20] };
/// assert_eq!(schedule.variant_label(), "monthly_days");
/// assert_eq!(schedule.render(), "15,20日");
///
/// let json = serde_json::to_string(&schedule).unwrap();
/// let back: Schedule = serde_json::from_str(&json).unwrap();
/// assert_eq!(back, schedule);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schedule {
    /// Fixed days of every month, no time component.
    MonthlyDays { days: Vec<i64> },
    /// Daily time windows with no date or weekday component.
    TimeWindows { windows: Vec<TimeWindow> },
    /// One or more explicit date ranges, each optionally carrying windows.
    DatePeriods { periods: Vec<DatePeriod> },
    /// Weekday-mask blocks, each optionally carrying windows.
    Weekly { blocks: Vec<WeekdayBlock> },
    /// Day-of-month blocks paired with time windows.
    DateBlocks { blocks: Vec<DayBlock> },
}

impl Schedule {
    /// Stable machine-readable label for the matched layout, used in
    /// reports and diagnostics.
    pub fn variant_label(&self) -> &'static str {
        match self {
            Self::MonthlyDays { .. } => "monthly_days",
            Self::TimeWindows { .. } => "time_windows",
            Self::DatePeriods { .. } => "date_periods",
            Self::Weekly { .. } => "weekly",
            Self::DateBlocks { .. } => "date_blocks",
        }
    }
}
