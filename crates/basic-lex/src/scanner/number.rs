//! Numeric literal matching.

use crate::config::LexerConfig;

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Matches one or more digits, optionally followed by `.` and one or more
/// digits. A `.` without digits after it is left for the next lexeme.
pub(super) fn match_number(rest: &str, _config: &LexerConfig) -> Option<usize> {
    let integer = digit_run(rest);
    if integer == 0 {
        return None;
    }

    let fraction = rest[integer..].strip_prefix('.').map_or(0, digit_run);
    if fraction == 0 {
        Some(integer)
    } else {
        Some(integer + 1 + fraction)
    }
}
