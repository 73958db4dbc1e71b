//! Trailing event-ID extraction.

use gamefeed_core::is_event_id;

/// Extracts the contiguous run of valid event IDs immediately preceding the
/// row terminator.
///
/// Scanning starts at the element just before the terminator and walks
/// toward the front, stopping permanently at the first value that fails the
/// ID predicate — valid IDs further toward the front are control data, not
/// part of the run. The result preserves the original left-to-right order.
///
/// # Examples
///
/// ```
/// use gamefeed_decoder::ids::extract_ids;
///
/// // 7 is not a valid ID, so the scan stops there.
/// assert_eq!(extract_ids(&[20, 7, 150, 1200, 0]), vec![150, 1200]);
/// assert_eq!(extract_ids(&[7, 0]), Vec::<i64>::new());
/// ```
pub fn extract_ids(tokens: &[i64]) -> Vec<i64> {
    if tokens.len() < 2 {
        return Vec::new();
    }

    let mut run: Vec<i64> = tokens[..tokens.len() - 1]
        .iter()
        .rev()
        .take_while(|&&value| is_event_id(value))
        .copied()
        .collect();
    run.reverse();
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stops_at_first_invalid_value() {
        assert_eq!(extract_ids(&[9, 7, 150, 1200, 0]), vec![150, 1200]);
    }

    #[test]
    fn test_invalid_value_blocks_earlier_valid_ids() {
        // 1200 and 150 are valid, but 7 sits between them and the run.
        assert_eq!(extract_ids(&[1200, 7, 150, 0]), vec![150]);
        assert_eq!(extract_ids(&[150, 1200, 7, 0]), Vec::<i64>::new());
    }

    #[test]
    fn test_whole_prefix_can_be_ids() {
        assert_eq!(extract_ids(&[55, 199, 4000, 1]), vec![55, 199, 4000]);
    }

    #[test]
    fn test_short_inputs_yield_empty() {
        assert_eq!(extract_ids(&[]), Vec::<i64>::new());
        assert_eq!(extract_ids(&[150]), Vec::<i64>::new());
    }

    #[test]
    fn test_terminator_itself_is_not_scanned() {
        // Only the element before the terminator starts the scan; a
        // terminator value of 1 is never treated as an ID.
        assert_eq!(extract_ids(&[150, 1]), vec![150]);
    }
}
