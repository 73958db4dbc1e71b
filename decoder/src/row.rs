//! Raw row normalization and numeric projection.
//!
//! A feed line arrives as tab-separated cells. Normalization trims the
//! cells, drops trailing empties, discards blank rows, and guarantees a
//! terminator cell at the end. Two distinct numeric projections follow:
//! the ID-extraction path filters out non-numeric cells wherever they sit,
//! while the schedule path keeps every position and zeroes the cells that
//! fail to parse, because segment layouts are positional.

/// Cell values recognized as row terminators. Any other trailing cell gets
/// a `"0"` appended after it.
pub const TERMINATORS: [&str; 2] = ["0", "1"];

/// Normalizes one raw feed line into ordered cells.
///
/// Returns `None` when the row is blank (every cell empty after trimming);
/// blank rows are discarded, not forwarded. The returned row is non-empty
/// and always ends in a terminator cell.
///
/// # Examples
///
/// ```
/// use gamefeed_decoder::row::normalize_row;
///
/// let row = normalize_row("150\t1200\t\t\t").unwrap();
/// assert_eq!(row, vec!["150", "1200", "0"]);
///
/// let row = normalize_row("150\t1").unwrap();
/// assert_eq!(row, vec!["150", "1"]);
///
/// assert!(normalize_row("\t\t").is_none());
/// ```
pub fn normalize_row(raw: &str) -> Option<Vec<String>> {
    let mut cells: Vec<String> = raw.split('\t').map(|cell| cell.trim().to_string()).collect();

    while cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }

    if cells.iter().all(|cell| cell.is_empty()) {
        return None;
    }

    let terminated = cells
        .last()
        .is_some_and(|cell| TERMINATORS.contains(&cell.as_str()));
    if !terminated {
        cells.push("0".to_string());
    }

    Some(cells)
}

/// Parses one cell as an integer. Trimming already happened during
/// normalization; this is the single fallible parse both projections build
/// on, so the degrade-on-failure policy stays visible at each call site.
pub fn parse_cell(cell: &str) -> Option<i64> {
    cell.parse::<i64>().ok()
}

/// Numeric projection for the ID-extraction path: non-numeric cells are
/// filtered out wherever they appear, so stray text anywhere in the row
/// never shifts the trailing ID run.
pub fn numeric_tokens(cells: &[String]) -> Vec<i64> {
    cells.iter().filter_map(|cell| parse_cell(cell)).collect()
}

/// Numeric projection for the schedule path: every position is kept and a
/// cell that fails to parse becomes `0`. Segment layouts are positional, so
/// dropping a cell would shift every later field.
pub fn positional_tokens(cells: &[String]) -> Vec<i64> {
    cells
        .iter()
        .map(|cell| parse_cell(cell).unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_empty_cells_dropped() {
        let row = normalize_row("10\t20\t\t\t").unwrap();
        assert_eq!(row, vec!["10", "20", "0"]);
    }

    #[test]
    fn test_blank_row_discarded() {
        assert!(normalize_row("").is_none());
        assert!(normalize_row("\t\t\t").is_none());
        assert!(normalize_row("  \t \t ").is_none());
    }

    #[test]
    fn test_terminator_appended_when_missing() {
        assert_eq!(normalize_row("150").unwrap(), vec!["150", "0"]);
        assert_eq!(normalize_row("150\t2").unwrap(), vec!["150", "2", "0"]);
    }

    #[test]
    fn test_existing_terminator_kept() {
        assert_eq!(normalize_row("150\t0").unwrap(), vec!["150", "0"]);
        assert_eq!(normalize_row("150\t1").unwrap(), vec!["150", "1"]);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let row = normalize_row(" 150 \t 0 ").unwrap();
        assert_eq!(row, vec!["150", "0"]);
    }

    #[test]
    fn test_numeric_tokens_filter_policy() {
        let cells = normalize_row("abc\t150\txx\t1200\t0").unwrap();
        assert_eq!(numeric_tokens(&cells), vec![150, 1200, 0]);
    }

    #[test]
    fn test_positional_tokens_zero_policy() {
        let cells = normalize_row("abc\t150\txx\t1200\t0").unwrap();
        assert_eq!(positional_tokens(&cells), vec![0, 150, 0, 1200, 0]);
    }

    #[test]
    fn test_negative_and_large_cells_parse() {
        assert_eq!(parse_cell("-5"), Some(-5));
        assert_eq!(parse_cell("999999"), Some(999_999));
        assert_eq!(parse_cell("12.5"), None);
        assert_eq!(parse_cell(""), None);
    }
}
