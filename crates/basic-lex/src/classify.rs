//! Token classification.
//!
//! The classifier decides a lexeme's kind from its text alone, trying the
//! rules in a fixed order: comment, string, number, keyword, identifier,
//! operator, delimiter. A lexeme no rule accepts becomes an Unknown token.

use crate::config::{LexerConfig, UnterminatedStringPolicy};
use crate::error::LexError;
use crate::recognize::{
    is_basic_whitespace, is_delimiter, is_identifier, is_number, is_operator, is_string_literal,
    is_unterminated_string, starts_with_comment_marker,
};
use crate::token::{keyword_from_ident, Token, TokenKind};

/// Assigns token kinds to lexemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    config: LexerConfig,
}

impl Classifier {
    /// Creates a classifier.
    pub fn new(config: LexerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Classifies `lexeme`, which starts at character `offset`.
    ///
    /// Surrounding whitespace is trimmed first; the offset moves past any
    /// leading whitespace so it still points at the first character kept.
    ///
    /// ```
    /// use basic_lex::{Classifier, LexerConfig, TokenKind};
    ///
    /// let classifier = Classifier::new(LexerConfig::default());
    /// let token = classifier.classify("  print", 10);
    /// assert_eq!(token.kind(), TokenKind::Keyword);
    /// assert_eq!(token.text(), "PRINT");
    /// assert_eq!(token.offset(), 12);
    /// ```
    pub fn classify(&self, lexeme: &str, offset: usize) -> Token {
        let trimmed = lexeme.trim_start_matches(is_basic_whitespace);
        // Whitespace is ASCII, so bytes trimmed equal characters trimmed.
        let offset = offset + (lexeme.len() - trimmed.len());
        let text = trimmed.trim_end_matches(is_basic_whitespace);

        if starts_with_comment_marker(text, self.config.case_insensitive_remarks) {
            Token::new(TokenKind::Comment, text, offset)
        } else if is_string_literal(text) || self.accepts_unterminated(text) {
            Token::new(TokenKind::String, text, offset)
        } else if is_number(text) {
            Token::new(TokenKind::Number, text, offset)
        } else if let Some(keyword) = keyword_from_ident(text) {
            Token::new(TokenKind::Keyword, keyword, offset)
        } else if is_identifier(text) {
            Token::new(TokenKind::Identifier, text, offset)
        } else if is_operator(text) {
            Token::new(TokenKind::Operator, text, offset)
        } else if is_delimiter(text) {
            Token::new(TokenKind::Delimiter, text, offset)
        } else {
            Token::new(TokenKind::Unknown, text, offset)
        }
    }

    fn accepts_unterminated(&self, text: &str) -> bool {
        self.config.unterminated_strings == UnterminatedStringPolicy::ExtendToLineEnd
            && is_unterminated_string(text)
    }

    /// The problem to report for a classified token, if any.
    ///
    /// Unknown tokens always have one. A String token missing its closing
    /// quote has a recoverable one.
    pub fn diagnose(&self, token: &Token) -> Option<LexError> {
        match token.kind() {
            TokenKind::Unknown => Some(unknown_cause(token.text(), token.offset())),
            TokenKind::String if !is_string_literal(token.text()) => {
                Some(LexError::UnterminatedString {
                    text: token.text().to_string(),
                    offset: token.offset(),
                    recovered: true,
                })
            },
            _ => None,
        }
    }
}

fn unknown_cause(lexeme: &str, offset: usize) -> LexError {
    let text = lexeme.to_string();
    let mut chars = lexeme.chars();
    let first = chars.next();
    let second = chars.next();

    match (first, second) {
        (Some('"'), _) => LexError::UnterminatedString {
            text,
            offset,
            recovered: false,
        },
        (Some(c), _) if c.is_ascii_digit() => LexError::MalformedNumber { text, offset },
        (Some('.'), Some(c)) if c.is_ascii_digit() => LexError::MalformedNumber { text, offset },
        (Some(_), None) => LexError::UnrecognizedCharacter { text, offset },
        _ => LexError::UnknownToken { text, offset },
    }
}

/// Classifies `lexeme` with the default configuration.
///
/// ```
/// use basic_lex::{classify, TokenKind};
///
/// assert_eq!(classify("3.14", 0).kind(), TokenKind::Number);
/// assert_eq!(classify("3.", 0).kind(), TokenKind::Unknown);
/// assert_eq!(classify("PRINTX", 0).kind(), TokenKind::Identifier);
/// ```
pub fn classify(lexeme: &str, offset: usize) -> Token {
    Classifier::default().classify(lexeme, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(lexeme: &str) -> TokenKind {
        classify(lexeme, 0).kind()
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(kind("REM hello"), TokenKind::Comment);
        assert_eq!(kind("\"REM\""), TokenKind::String);
        assert_eq!(kind("10"), TokenKind::Number);
        assert_eq!(kind("THEN"), TokenKind::Keyword);
        assert_eq!(kind("THENX"), TokenKind::Identifier);
        assert_eq!(kind("<>"), TokenKind::Operator);
        assert_eq!(kind(","), TokenKind::Delimiter);
        assert_eq!(kind("@"), TokenKind::Unknown);
    }

    #[test]
    fn test_comment_wins_over_keyword() {
        let token = classify("REM", 0);
        assert_eq!(token.kind(), TokenKind::Comment);
        assert_eq!(token.text(), "REM");
    }

    #[test]
    fn test_lowercase_rem_is_keyword_by_default() {
        let token = classify("rem", 0);
        assert_eq!(token.kind(), TokenKind::Keyword);
        assert_eq!(token.text(), "REM");

        let classifier = Classifier::new(LexerConfig::default().with_case_insensitive_remarks(true));
        assert_eq!(classifier.classify("rem", 0).kind(), TokenKind::Comment);
        assert_eq!(classifier.classify("rem", 0).text(), "rem");
    }

    #[test]
    fn test_keyword_case_normalization() {
        for spelling in ["let", "LET", "Let", "lEt"] {
            let token = classify(spelling, 5);
            assert_eq!(token.kind(), TokenKind::Keyword);
            assert_eq!(token.text(), "LET");
            assert_eq!(token.offset(), 5);
        }
    }

    #[test]
    fn test_identifier_case_preserved() {
        assert_eq!(classify("Total_1", 0).text(), "Total_1");
    }

    #[test]
    fn test_trims_and_shifts_offset() {
        let token = classify(" \t X \n", 7);
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.text(), "X");
        assert_eq!(token.offset(), 10);
    }

    #[test]
    fn test_number_boundaries() {
        assert_eq!(kind("3.14"), TokenKind::Number);
        assert_eq!(kind(".5"), TokenKind::Number);
        assert_eq!(kind("3."), TokenKind::Unknown);
        assert_eq!(kind("3.1.4"), TokenKind::Unknown);
    }

    #[test]
    fn test_strings() {
        assert_eq!(kind("\"\""), TokenKind::String);
        assert_eq!(kind("\"a\"b\""), TokenKind::Unknown);
        assert_eq!(kind("\"abc"), TokenKind::Unknown);
    }

    #[test]
    fn test_unterminated_string_accepted_when_extending() {
        let classifier = Classifier::new(
            LexerConfig::default().with_unterminated_strings(UnterminatedStringPolicy::ExtendToLineEnd),
        );
        let token = classifier.classify("\"abc", 3);
        assert_eq!(token.kind(), TokenKind::String);
        assert_eq!(
            classifier.diagnose(&token),
            Some(LexError::UnterminatedString {
                text: "\"abc".to_string(),
                offset: 3,
                recovered: true,
            })
        );
    }

    #[test]
    fn test_diagnose_unknown_causes() {
        let classifier = Classifier::default();
        let cause = |lexeme: &str| classifier.diagnose(&classifier.classify(lexeme, 0));

        assert!(matches!(cause("@"), Some(LexError::UnrecognizedCharacter { .. })));
        assert!(matches!(
            cause("\""),
            Some(LexError::UnterminatedString { recovered: false, .. })
        ));
        assert!(matches!(cause("3.1.4"), Some(LexError::MalformedNumber { .. })));
        assert!(matches!(cause(".5.5"), Some(LexError::MalformedNumber { .. })));
        assert!(matches!(cause("."), Some(LexError::UnrecognizedCharacter { .. })));
        assert!(matches!(cause("$$"), Some(LexError::UnknownToken { .. })));
        assert!(matches!(cause(""), Some(LexError::UnknownToken { .. })));
    }

    #[test]
    fn test_diagnose_valid_tokens() {
        let classifier = Classifier::default();
        for lexeme in ["PRINT", "X", "10", "\"hi\"", "REM x", "<=", "("] {
            assert_eq!(classifier.diagnose(&classifier.classify(lexeme, 0)), None, "{lexeme}");
        }
    }
}
