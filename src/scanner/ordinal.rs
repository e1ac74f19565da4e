//! Ordinal extraction from clip filenames.

use crate::types::VIDEO_SUFFIX;
use regex::Regex;
use std::sync::LazyLock;

static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"([0-9]+){}$", regex::escape(VIDEO_SUFFIX));
    Regex::new(&pattern).expect("ordinal pattern is a valid regex")
});

/// Parse the ordinal from the digits immediately before the `.mp4` suffix.
///
/// Returns `None` when the name lacks that shape or the digits overflow
/// `u64`.
///
/// ```
/// use clipseq::scanner::ordinal::parse_ordinal;
///
/// assert_eq!(parse_ordinal("clip_042.mp4"), Some(42));
/// assert_eq!(parse_ordinal("clip.mp4"), None);
/// ```
pub fn parse_ordinal(filename: &str) -> Option<u64> {
    let caps = ORDINAL_RE.captures(filename)?;
    caps.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_digits() {
        assert_eq!(parse_ordinal("a_001.mp4"), Some(1));
        assert_eq!(parse_ordinal("b_002.mp4"), Some(2));
        assert_eq!(parse_ordinal("take7.mp4"), Some(7));
        assert_eq!(parse_ordinal("0.mp4"), Some(0));
    }

    #[test]
    fn test_only_last_digit_run_counts() {
        assert_eq!(parse_ordinal("2024_clip_15.mp4"), Some(15));
        assert_eq!(parse_ordinal("20240501_L_000003_120.mp4"), Some(120));
    }

    #[test]
    fn test_non_matching_names() {
        assert_eq!(parse_ordinal("clip.mp4"), None);
        assert_eq!(parse_ordinal("clip_01a.mp4"), None);
        assert_eq!(parse_ordinal("clip_01.mp4.bak"), None);
        assert_eq!(parse_ordinal("clip_01.MP4"), None);
        assert_eq!(parse_ordinal("clip_01xmp4"), None);
        assert_eq!(parse_ordinal("clip_01.mkv"), None);
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert_eq!(parse_ordinal("clip_١٢.mp4"), None);
    }

    #[test]
    fn test_overflow_is_skipped() {
        assert_eq!(parse_ordinal("clip_99999999999999999999999.mp4"), None);
        assert_eq!(
            parse_ordinal("clip_18446744073709551615.mp4"),
            Some(u64::MAX)
        );
    }
}
