//! Operator and delimiter matching.

use crate::config::LexerConfig;

const RELATIONAL: [&str; 3] = ["<>", "<=", ">="];

const SINGLE: [char; 10] = ['=', '+', '-', '*', '/', '<', '>', '(', ')', ','];

/// Matches `<>`, `<=` or `>=`.
pub(super) fn match_relational(rest: &str, _config: &LexerConfig) -> Option<usize> {
    RELATIONAL
        .iter()
        .find(|op| rest.starts_with(*op))
        .map(|op| op.len())
}

/// Matches a one-character operator or delimiter.
pub(super) fn match_single(rest: &str, _config: &LexerConfig) -> Option<usize> {
    rest.starts_with(SINGLE).then_some(1)
}
