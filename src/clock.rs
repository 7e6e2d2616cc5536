//! Timestamp provider for the line formatter.

use std::fmt::Write;

use chrono::Local;

/// Timestamp layout stamped on every console line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Emitted when the clock cannot be formatted; a log call never fails
/// because of the clock.
pub const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00:00";

/// Current local wall-clock time, formatted as `YYYY-MM-DD HH:MM:SS`.
pub fn now_formatted() -> String {
    let mut out = String::with_capacity(FALLBACK_TIMESTAMP.len());
    if write!(out, "{}", Local::now().format(TIMESTAMP_FORMAT)).is_err() {
        return FALLBACK_TIMESTAMP.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_timestamp_shaped(s: &str) -> bool {
        let bytes = s.as_bytes();
        if bytes.len() != 19 {
            return false;
        }
        for (i, b) in bytes.iter().enumerate() {
            let ok = match i {
                4 | 7 => *b == b'-',
                10 => *b == b' ',
                13 | 16 => *b == b':',
                _ => b.is_ascii_digit(),
            };
            if !ok {
                return false;
            }
        }
        true
    }

    #[test]
    fn now_formatted_matches_the_documented_layout() {
        let ts = now_formatted();
        assert!(is_timestamp_shaped(&ts), "unexpected timestamp: {ts:?}");
    }

    #[test]
    fn fallback_matches_the_documented_layout() {
        assert!(is_timestamp_shaped(FALLBACK_TIMESTAMP));
    }
}
