//! Identifier and keyword matching.

use crate::config::LexerConfig;
use crate::recognize::{is_ident_continue, is_ident_start};

/// Matches a letter or underscore followed by letters, digits and
/// underscores. Keywords are told apart later, by the classifier.
pub(super) fn match_word(rest: &str, _config: &LexerConfig) -> Option<usize> {
    let mut chars = rest.chars();
    match chars.next() {
        // Identifier characters are ASCII, one byte each.
        Some(first) if is_ident_start(first) => {
            Some(1 + chars.take_while(|&c| is_ident_continue(c)).count())
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(rest: &str) -> Option<&str> {
        match_word(rest, &LexerConfig::default()).map(|len| &rest[..len])
    }

    #[test]
    fn test_word() {
        assert_eq!(matched("PRINTX = 1"), Some("PRINTX"));
        assert_eq!(matched("_a1_b2("), Some("_a1_b2"));
        assert_eq!(matched("x"), Some("x"));
    }

    #[test]
    fn test_stops_at_non_ascii() {
        assert_eq!(matched("caféX"), Some("caf"));
    }

    #[test]
    fn test_no_word() {
        assert_eq!(matched("1X"), None);
        assert_eq!(matched("$X"), None);
        assert_eq!(matched("é"), None);
    }
}
