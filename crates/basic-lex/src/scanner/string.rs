//! String literal matching.

use crate::config::{LexerConfig, UnterminatedStringPolicy};
use crate::recognize::{is_basic_whitespace, is_line_end};

/// Matches a double-quoted literal that closes on the same line.
///
/// A literal with no closing quote before the line end either fails to
/// match, leaving the quote to the fallback, or runs to the end of the line,
/// depending on the configured policy.
pub(super) fn match_string(rest: &str, config: &LexerConfig) -> Option<usize> {
    let body = rest.strip_prefix('"')?;
    let stop = body.find(|c: char| c == '"' || is_line_end(c));

    if let Some(end) = stop {
        if body[end..].starts_with('"') {
            return Some(end + 2);
        }
    }

    match config.unterminated_strings {
        UnterminatedStringPolicy::Reject => None,
        UnterminatedStringPolicy::ExtendToLineEnd => {
            let line = match stop {
                Some(end) => &body[..end],
                None => body,
            };
            Some(1 + line.trim_end_matches(is_basic_whitespace).len())
        },
    }
}
