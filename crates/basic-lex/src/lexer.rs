//! Lexer driver.
//!
//! [`Lexer`] pulls lexemes from the [`Scanner`], classifies each one and
//! reports problems to the diagnostic sink. [`Tokenizer`] runs a lexer over a
//! whole input.

use basic_util::{Diagnostic, DiagnosticSink, Handler};

use crate::classify::Classifier;
use crate::config::LexerConfig;
use crate::scanner::Scanner;
use crate::token::Token;

/// Lexer for BASIC source text.
///
/// An Unknown token is still returned to the caller; the matching diagnostic
/// goes to the sink first.
///
/// ```
/// use basic_lex::{Lexer, TokenKind};
/// use basic_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("PRINT @", &mut handler);
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Keyword);
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Unknown);
/// assert!(lexer.next_token().is_none());
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    classifier: Classifier,
    sink: &'a mut dyn DiagnosticSink,
    diagnostic_count: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self::with_config(source, LexerConfig::default(), sink)
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(
        source: &'a str,
        config: LexerConfig,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            scanner: Scanner::with_config(source, config),
            classifier: Classifier::new(config),
            sink,
            diagnostic_count: 0,
        }
    }

    /// Returns the next token, or `None` at the end of the input.
    pub fn next_token(&mut self) -> Option<Token> {
        let lexeme = self.scanner.next_lexeme()?;
        let token = self.classifier.classify(lexeme.text, lexeme.offset);

        if let Some(err) = self.classifier.diagnose(&token) {
            self.diagnostic_count += 1;
            self.sink.emit(err.to_diagnostic(lexeme.span));
        }

        log::trace!("{} ({})", token, lexeme.span);
        Some(token)
    }

    /// Number of diagnostics emitted so far.
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostic_count
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes whole inputs with a fixed configuration.
///
/// ```
/// use basic_lex::{Tokenizer, LexerConfig, TokenKind};
/// use basic_util::NullSink;
///
/// let tokenizer = Tokenizer::new(LexerConfig::default().with_case_insensitive_remarks(true));
/// let tokens = tokenizer.tokenize("rem quiet", &mut NullSink);
/// assert_eq!(tokens[0].kind(), TokenKind::Comment);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    config: LexerConfig,
}

impl Tokenizer {
    /// Creates a tokenizer.
    pub fn new(config: LexerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Tokenizes `input`, reporting problems to `sink`.
    pub fn tokenize(&self, input: &str, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
        let mut lexer = Lexer::with_config(input, self.config, sink);
        let tokens: Vec<Token> = lexer.by_ref().collect();
        log::debug!(
            "tokenized {} characters into {} tokens with {} diagnostics",
            input.chars().count(),
            tokens.len(),
            lexer.diagnostic_count()
        );
        tokens
    }

    /// Tokenizes `input` and returns the diagnostics alongside the tokens.
    pub fn tokenize_collecting(&self, input: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut handler = Handler::new();
        let tokens = self.tokenize(input, &mut handler);
        (tokens, handler.take_diagnostics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnterminatedStringPolicy;
    use crate::token::TokenKind;
    use basic_util::{DiagnosticCode, Level, NullSink, Span};

    fn kinds(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind(), t.text())).collect()
    }

    #[test]
    fn test_lexer_iterates_tokens() {
        let mut sink = NullSink;
        let tokens: Vec<Token> = Lexer::new("GOTO 100", &mut sink).collect();
        assert_eq!(
            kinds(&tokens),
            vec![(TokenKind::Keyword, "GOTO"), (TokenKind::Number, "100")]
        );
    }

    #[test]
    fn test_unknown_reported_with_span() {
        let mut handler = Handler::new();
        let tokens = Tokenizer::default().tokenize("LET X\n  @", &mut handler);

        assert_eq!(tokens[2], Token::new(TokenKind::Unknown, "@", 8));
        assert_eq!(handler.error_count(), 1);
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.span, Span::new(8, 9, 2, 3));
        assert!(diag.message.contains("\"@\""));
        assert!(diag.message.contains("position 8"));
    }

    #[test]
    fn test_closure_sink() {
        let mut messages = Vec::new();
        let mut sink = |d: Diagnostic| messages.push(d.message);
        let tokens = Tokenizer::default().tokenize("1 $ 2", &mut sink);
        assert_eq!(tokens.len(), 3);
        assert_eq!(messages, vec!["unrecognized character \"$\" at position 2"]);
    }

    #[test]
    fn test_rejected_quote_is_reported() {
        let (tokens, diagnostics) = Tokenizer::default().tokenize_collecting("PRINT \"oops");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "PRINT"),
                (TokenKind::Unknown, "\""),
                (TokenKind::Identifier, "oops"),
            ]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, Level::Error);
        assert_eq!(
            diagnostics[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
    }

    #[test]
    fn test_extended_string_is_warned() {
        let tokenizer = Tokenizer::new(
            LexerConfig::default().with_unterminated_strings(UnterminatedStringPolicy::ExtendToLineEnd),
        );
        let (tokens, diagnostics) = tokenizer.tokenize_collecting("PRINT \"oops\nEND");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "PRINT"),
                (TokenKind::String, "\"oops"),
                (TokenKind::Keyword, "END"),
            ]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, Level::Warning);
    }

    #[test]
    fn test_diagnostic_count() {
        let mut sink = NullSink;
        let mut lexer = Lexer::new("@ # X", &mut sink);
        while lexer.next_token().is_some() {}
        assert_eq!(lexer.diagnostic_count(), 2);
    }

    #[test]
    fn test_clean_input_has_no_diagnostics() {
        let mut handler = Handler::new_panicking();
        let tokens = Tokenizer::default().tokenize("FOR I = 1 TO 10\nNEXT I", &mut handler);
        assert_eq!(tokens.len(), 8);
        assert!(!handler.has_errors());
    }
}
