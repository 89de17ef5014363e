//! Comment matching.

use crate::config::LexerConfig;
use crate::recognize::{is_basic_whitespace, is_line_end, starts_with_comment_marker};

/// Matches the comment marker and everything after it on the same line,
/// without trailing whitespace.
pub(super) fn match_comment(rest: &str, config: &LexerConfig) -> Option<usize> {
    if !starts_with_comment_marker(rest, config.case_insensitive_remarks) {
        return None;
    }
    let line = match rest.find(is_line_end) {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(line.trim_end_matches(is_basic_whitespace).len())
}
