//! Strict timestamp grammar.
//!
//! Two textual grammars are accepted, checked in order:
//!
//! - `HH:MM:SS.mmm` - exactly 2-digit hours, minutes, seconds and
//!   3-digit milliseconds
//! - `MM:SS.mmm` - exactly 2-digit minutes, seconds and 3-digit
//!   milliseconds
//!
//! Anything else is rejected: no single-digit fields, no comma
//! separator, no missing millisecond part.

/// Parse a timestamp token into integer milliseconds.
///
/// Returns `None` if the token matches neither grammar. The caller
/// attaches line context to the error.
pub fn parse_timestamp(token: &str) -> Option<u64> {
    let token = token.trim();

    let (clock, millis) = token.split_once('.')?;
    let millis = fixed_field(millis, 3)?;

    let mut parts = clock.split(':');
    let first = fixed_field(parts.next()?, 2)?;
    let second = fixed_field(parts.next()?, 2)?;
    let third = parts.next().map(|p| fixed_field(p, 2));
    if parts.next().is_some() {
        return None;
    }

    match third {
        // HH:MM:SS.mmm
        Some(Some(seconds)) => {
            Some(first * 3_600_000 + second * 60_000 + seconds * 1_000 + millis)
        }
        // Third clock field present but malformed
        Some(None) => None,
        // MM:SS.mmm
        None => Some(first * 60_000 + second * 1_000 + millis),
    }
}

/// Parse a field of exactly `width` ASCII digits.
fn fixed_field(s: &str, width: usize) -> Option<u64> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Split a timestamp-range line on `-->` into (start, end) tokens.
///
/// Both sides are trimmed but not yet parsed. Returns `None` if the
/// separator is absent or appears more than once.
pub fn split_range(line: &str) -> Option<(&str, &str)> {
    let (start, rest) = line.split_once("-->")?;
    if rest.contains("-->") {
        return None;
    }
    Some((start.trim(), rest.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_grammar() {
        assert_eq!(parse_timestamp("00:00:00.000"), Some(0));
        assert_eq!(parse_timestamp("00:01:02.345"), Some(62_345));
        assert_eq!(parse_timestamp("01:02:03.456"), Some(3_723_456));
        assert_eq!(parse_timestamp("10:00:00.000"), Some(36_000_000));
    }

    #[test]
    fn parses_minutes_grammar() {
        assert_eq!(parse_timestamp("00:00.000"), Some(0));
        assert_eq!(parse_timestamp("02:03.456"), Some(123_456));
        assert_eq!(parse_timestamp("59:59.999"), Some(3_599_999));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_timestamp("  00:00:01.000  "), Some(1_000));
    }

    #[test]
    fn rejects_loose_shapes() {
        // Single-digit fields
        assert_eq!(parse_timestamp("1:2:3"), None);
        assert_eq!(parse_timestamp("1:02:03.456"), None);
        assert_eq!(parse_timestamp("0:00.000"), None);
        // Missing or short milliseconds
        assert_eq!(parse_timestamp("00:00:01"), None);
        assert_eq!(parse_timestamp("00:00:01.00"), None);
        assert_eq!(parse_timestamp("00:00:01.0000"), None);
        // SRT-style comma separator
        assert_eq!(parse_timestamp("00:00:01,000"), None);
        // Too many clock fields
        assert_eq!(parse_timestamp("00:00:00:01.000"), None);
        // Garbage
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("abc"), None);
        assert_eq!(parse_timestamp("00:xx:01.000"), None);
    }

    #[test]
    fn splits_range_lines() {
        assert_eq!(
            split_range("00:00:01.000 --> 00:00:02.000"),
            Some(("00:00:01.000", "00:00:02.000"))
        );
        // Cue settings after the end token stay attached to the end side;
        // the strict grammar rejects them downstream.
        assert_eq!(
            split_range("00:01.000-->00:02.000"),
            Some(("00:01.000", "00:02.000"))
        );
        assert_eq!(split_range("no separator here"), None);
        assert_eq!(split_range("a --> b --> c"), None);
    }
}
