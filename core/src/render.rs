//! Rendering of decoded schedules into display text.
//!
//! Rendering is a deterministic projection of a [`Schedule`] descriptor:
//! the same descriptor always produces the same lines. Classification never
//! happens here — by the time a descriptor exists, its layout is fixed.

use std::collections::BTreeMap;

use crate::format::{
    EVERY_WEEK_PREFIX, MONTH_DAY_SUFFIX, RANGE_SEPARATOR, WINDOW_SEPARATOR, format_short_date,
    format_time, format_time_range, format_weekdays,
};
use crate::types::{DatePeriod, Schedule, TimeWindow};

impl Schedule {
    /// Renders the schedule as display lines, one per block/period.
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            Self::MonthlyDays { days } => {
                if days.is_empty() {
                    Vec::new()
                } else {
                    vec![format!("{}{}", join_days(days), MONTH_DAY_SUFFIX)]
                }
            }
            Self::TimeWindows { windows } => {
                if windows.is_empty() {
                    Vec::new()
                } else {
                    vec![join_windows(windows)]
                }
            }
            Self::DatePeriods { periods } => periods.iter().map(render_period).collect(),
            Self::Weekly { blocks } => blocks
                .iter()
                .map(|block| {
                    let label = format_weekdays(block.weekdays);
                    if block.windows.is_empty() {
                        format!("{EVERY_WEEK_PREFIX}{label}")
                    } else {
                        format!("{label} {}", join_windows(&block.windows))
                    }
                })
                .collect(),
            Self::DateBlocks { blocks } => blocks
                .iter()
                .map(|block| {
                    let days = format!("{}{}", join_days(&block.days), MONTH_DAY_SUFFIX);
                    if block.windows.is_empty() {
                        days
                    } else {
                        format!("{days} {}", join_windows(&block.windows))
                    }
                })
                .collect(),
        }
    }

    /// Renders the schedule as a single newline-joined string.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamefeed_core::Schedule;
    ///
    /// let schedule = Schedule::MonthlyDays { days: vec![15, 20] };
    /// assert_eq!(schedule.render(), "15,20日");
    /// ```
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }
}

fn join_days(days: &[i64]) -> String {
    days.iter()
        .map(|day| day.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn join_windows(windows: &[TimeWindow]) -> String {
    windows
        .iter()
        .map(|window| format_time_range(window.start, window.end))
        .collect::<Vec<_>>()
        .join(WINDOW_SEPARATOR)
}

/// `MM/DD(HH:MM)~MM/DD(HH:MM)`, dropping a parenthesized time whose
/// rendering is suppressed, with any sub-windows appended after a space.
fn render_period(period: &DatePeriod) -> String {
    let mut line = format!(
        "{}{}{}",
        date_with_time(period.start_date, period.start_time),
        RANGE_SEPARATOR,
        date_with_time(period.end_date, period.end_time),
    );
    if !period.windows.is_empty() {
        line.push(' ');
        line.push_str(&join_windows(&period.windows));
    }
    line
}

fn date_with_time(date: i64, time: i64) -> String {
    let rendered_time = format_time(time);
    if rendered_time.is_empty() {
        format_short_date(date)
    } else {
        format!("{}({rendered_time})", format_short_date(date))
    }
}

/// Formats the `[<id> <name>]` label line for an event, looking the name up
/// in a caller-supplied table.
///
/// The table is a plain immutable parameter: no module-level name registry
/// exists, so callers stay free to scope tables per feed.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use gamefeed_core::render::format_event_label;
///
/// let names = BTreeMap::from([(1200, "Summer Festival".to_string())]);
/// assert_eq!(format_event_label(1200, &names), "[1200 Summer Festival]");
/// assert_eq!(format_event_label(150, &names), "[150]");
/// ```
pub fn format_event_label(id: i64, names: &BTreeMap<i64, String>) -> String {
    match names.get(&id) {
        Some(name) => format!("[{id} {name}]"),
        None => format!("[{id}]"),
    }
}
