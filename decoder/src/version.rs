//! App-version literal handling.
//!
//! The feed gates events on app versions in two spellings: packed integers
//! (`130400`) inside rows and dotted literals (`13.4.0`) in surrounding
//! metadata. This module converts a dotted literal to the packed form and
//! renders version ranges for display.

use std::sync::LazyLock;

use regex::Regex;

use gamefeed_core::format::format_version;

static VERSION_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*v?(\d{1,3})\.(\d{1,2})(?:\.(\d{1,2}))?\s*$").expect("static regex must compile")
});

/// Parses a dotted version literal into its packed integer form.
///
/// Accepts `major.minor` and `major.minor.patch` with an optional `v`
/// prefix. Anything else — dates, IP-like quads, plain numbers — returns
/// `None`.
///
/// # Examples
///
/// ```
/// use gamefeed_decoder::version::parse_version_literal;
///
/// assert_eq!(parse_version_literal("13.4.0"), Some(130_400));
/// assert_eq!(parse_version_literal("v1.2.3"), Some(10_203));
/// assert_eq!(parse_version_literal("1.2"), Some(10_200));
/// assert_eq!(parse_version_literal("2024.01.15.3"), None);
/// assert_eq!(parse_version_literal("13"), None);
/// ```
pub fn parse_version_literal(text: &str) -> Option<i64> {
    let captures = VERSION_LITERAL_RE.captures(text)?;

    let component = |index: usize| -> i64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    };

    Some(component(1) * 10_000 + component(2) * 100 + component(3))
}

/// Renders a packed version range as `min~max`.
///
/// A zero `max` means the gate is open-ended and renders as `min~`.
///
/// # Examples
///
/// ```
/// use gamefeed_decoder::version::format_version_range;
///
/// assert_eq!(format_version_range(130_400, 140_000), "13.4.0~14.0.0");
/// assert_eq!(format_version_range(130_400, 0), "13.4.0~");
/// ```
pub fn format_version_range(min: i64, max: i64) -> String {
    if max == 0 {
        format!("{}~", format_version(min))
    } else {
        format!("{}~{}", format_version(min), format_version(max))
    }
}
