//! Formatting primitives for packed feed values.
//!
//! Every function here is pure and total over integer input: malformed
//! values produce odd-looking strings, never panics. The decoder and any
//! presentation layer share these, so display stays identical everywhere a
//! packed time, date, or version surfaces.

/// Packed `YYYYMMDD` date the feed uses to mean "no end / permanent".
pub const PERMANENT_DATE: i64 = 2030_01_01;

/// Fixed token rendered for [`PERMANENT_DATE`].
pub const PERMANENT_LABEL: &str = "#permanent";

/// Weekday names in bit order: bit 1 = Sunday through bit 64 = Saturday.
pub const WEEKDAY_NAMES: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Separator between weekday names in a multi-day label.
pub const WEEKDAY_JOIN: &str = "・";

/// Suffix appended to a single-weekday label (`月` → `月曜日`).
pub const WEEKDAY_SUFFIX: &str = "曜日";

/// Prefix for a weekly entry that has no time windows (`毎週月曜日`).
pub const EVERY_WEEK_PREFIX: &str = "毎週";

/// Suffix appended to a day-of-month list (`15,20` → `15,20日`).
pub const MONTH_DAY_SUFFIX: &str = "日";

/// Separator between the two ends of a time or date range.
pub const RANGE_SEPARATOR: &str = "~";

/// Separator between time windows in a window list.
pub const WINDOW_SEPARATOR: &str = "&";

/// Formats a packed `HHMM` time as `HH:MM`.
///
/// The feed uses `0` and `1100` as boundary markers that are suppressed from
/// display; both render as the empty string. Historical decoder revisions
/// disagree on the `1100` case — the suppressing revision is canonical here.
///
/// # Examples
///
/// ```
/// use gamefeed_core::format::format_time;
///
/// assert_eq!(format_time(800), "08:00");
/// assert_eq!(format_time(2359), "23:59");
/// assert_eq!(format_time(0), "");
/// assert_eq!(format_time(1100), "");
/// ```
pub fn format_time(value: i64) -> String {
    if value == 0 || value == 1100 {
        return String::new();
    }
    format!("{:02}:{:02}", value / 100, value % 100)
}

/// Formats a start/end pair of packed times as `HH:MM~HH:MM`.
///
/// Suppressed boundary values leave their side empty, so a window ending at
/// a suppressed time renders as `08:00~`.
pub fn format_time_range(start: i64, end: i64) -> String {
    format!(
        "{}{}{}",
        format_time(start),
        RANGE_SEPARATOR,
        format_time(end)
    )
}

/// Formats a packed `YYYYMMDD` date as `YYYY/MM/DD`.
///
/// The permanent sentinel renders as [`PERMANENT_LABEL`].
///
/// # Examples
///
/// ```
/// use gamefeed_core::format::format_date;
///
/// assert_eq!(format_date(2024_03_05), "2024/03/05");
/// assert_eq!(format_date(2030_01_01), "#permanent");
/// ```
pub fn format_date(value: i64) -> String {
    if value == PERMANENT_DATE {
        return PERMANENT_LABEL.to_string();
    }
    format!(
        "{:04}/{:02}/{:02}",
        value / 10_000,
        (value / 100) % 100,
        value % 100
    )
}

/// Formats a packed `YYYYMMDD` date as the short `MM/DD` form used inside
/// period lines. The permanent sentinel still renders as
/// [`PERMANENT_LABEL`]; showing it as `01/01` would misread as a real date.
pub fn format_short_date(value: i64) -> String {
    if value == PERMANENT_DATE {
        return PERMANENT_LABEL.to_string();
    }
    format!("{:02}/{:02}", (value / 100) % 100, value % 100)
}

/// Decomposes a packed version integer into `(major, minor, patch)`.
pub fn decompose_version(value: i64) -> (i64, i64, i64) {
    (value / 10_000, (value % 10_000) / 100, value % 100)
}

/// Formats a packed version integer as `major.minor.patch`.
///
/// # Examples
///
/// ```
/// use gamefeed_core::format::format_version;
///
/// assert_eq!(format_version(10203), "1.2.3");
/// assert_eq!(format_version(130400), "13.4.0");
/// ```
pub fn format_version(value: i64) -> String {
    let (major, minor, patch) = decompose_version(value);
    format!("{major}.{minor}.{patch}")
}

/// Returns the names of the weekdays set in `mask`, in Sunday-first order.
///
/// Bits beyond the seven weekday bits are ignored; a zero mask yields an
/// empty list.
pub fn weekday_names(mask: i64) -> Vec<&'static str> {
    WEEKDAY_NAMES
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, name)| *name)
        .collect()
}

/// Formats a weekday bitmask as a day label.
///
/// Multiple days join with [`WEEKDAY_JOIN`]; exactly one day appends
/// [`WEEKDAY_SUFFIX`].
///
/// # Examples
///
/// ```
/// use gamefeed_core::format::format_weekdays;
///
/// assert_eq!(format_weekdays(9), "日・水");
/// assert_eq!(format_weekdays(2), "月曜日");
/// assert_eq!(format_weekdays(0), "");
/// ```
pub fn format_weekdays(mask: i64) -> String {
    let names = weekday_names(mask);
    match names.len() {
        0 => String::new(),
        1 => format!("{}{}", names[0], WEEKDAY_SUFFIX),
        _ => names.join(WEEKDAY_JOIN),
    }
}
