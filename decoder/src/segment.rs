//! Schedule segment location.

use gamefeed_core::SEGMENT_SENTINEL;

/// Finds the embedded schedule segment in a row's positional token stream.
///
/// The segment starts at the sentinel pair `(999999, 0)` and runs to the end
/// of the stream. The **last** occurrence wins: the sentinel value can appear
/// earlier as ordinary data (a large ID adjacent to an unrelated zero), and
/// only the final occurrence is guaranteed to open real schedule data.
///
/// # Examples
///
/// ```
/// use gamefeed_decoder::segment::locate_segment;
///
/// let tokens = [999_999, 0, 1, 0, 2, 999_999, 0, 1, 0, 3];
/// assert_eq!(locate_segment(&tokens), Some(&tokens[5..]));
///
/// assert_eq!(locate_segment(&[1, 2, 3]), None);
/// ```
pub fn locate_segment(tokens: &[i64]) -> Option<&[i64]> {
    let start = tokens
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] == SEGMENT_SENTINEL && pair[1] == 0)
        .map(|(index, _)| index)
        .last()?;
    Some(&tokens[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_sentinel_pair_wins() {
        let tokens = [999_999, 0, 1, 0, 2, 999_999, 0, 1, 0, 3];
        assert_eq!(locate_segment(&tokens), Some(&tokens[5..]));
    }

    #[test]
    fn test_single_sentinel_pair() {
        let tokens = [150, 1200, 999_999, 0, 1, 0, 2, 15, 20];
        assert_eq!(locate_segment(&tokens), Some(&tokens[2..]));
    }

    #[test]
    fn test_absent_sentinel_yields_none() {
        assert_eq!(locate_segment(&[150, 1200, 0]), None);
        assert_eq!(locate_segment(&[]), None);
    }

    #[test]
    fn test_sentinel_without_zero_is_not_a_match() {
        assert_eq!(locate_segment(&[999_999, 1, 2]), None);
    }

    #[test]
    fn test_sentinel_pair_at_stream_end() {
        let tokens = [5, 999_999, 0];
        assert_eq!(locate_segment(&tokens), Some(&tokens[1..]));
    }
}
