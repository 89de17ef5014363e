//! Error types for basic-lex.
//!
//! [`LexError`] describes a lexical problem. Tokenization never returns it as
//! an `Err`: the offending lexeme still becomes a token and the error is
//! turned into a [`Diagnostic`] for the caller's sink.

use std::path::PathBuf;

use basic_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level, Span};
use thiserror::Error;

/// A problem found while classifying one lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A single character that starts no lexical category
    #[error("unrecognized character {text:?} at position {offset}")]
    UnrecognizedCharacter { text: String, offset: usize },

    /// A quote with no closing quote before the end of the line
    #[error("unterminated string literal {text:?} at position {offset}")]
    UnterminatedString {
        text: String,
        offset: usize,
        /// Whether the lexeme was still accepted as a String token
        recovered: bool,
    },

    /// Something shaped like a number that the numeric recognizer rejects
    #[error("malformed number {text:?} at position {offset}")]
    MalformedNumber { text: String, offset: usize },

    /// A multi-character lexeme that matches no rule
    #[error("unknown token {text:?} at position {offset}")]
    UnknownToken { text: String, offset: usize },
}

impl LexError {
    /// Offending lexeme text.
    pub fn text(&self) -> &str {
        match self {
            LexError::UnrecognizedCharacter { text, .. }
            | LexError::UnterminatedString { text, .. }
            | LexError::MalformedNumber { text, .. }
            | LexError::UnknownToken { text, .. } => text,
        }
    }

    /// Character offset of the offending lexeme.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnrecognizedCharacter { offset, .. }
            | LexError::UnterminatedString { offset, .. }
            | LexError::MalformedNumber { offset, .. }
            | LexError::UnknownToken { offset, .. } => *offset,
        }
    }

    /// Severity of the resulting diagnostic.
    pub fn level(&self) -> Level {
        match self {
            LexError::UnterminatedString { recovered: true, .. } => Level::Warning,
            _ => Level::Error,
        }
    }

    /// Diagnostic code for this kind of problem.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnrecognizedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::MalformedNumber { .. } => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            LexError::UnknownToken { .. } => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
        }
    }

    /// Builds the diagnostic reported for this error at `span`.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let builder = DiagnosticBuilder::new(self.level(), self.to_string())
            .code(self.code())
            .span(span);
        let builder = match self {
            LexError::UnrecognizedCharacter { .. } | LexError::UnknownToken { .. } => {
                builder.help("remove it or replace it with a valid token")
            },
            LexError::UnterminatedString { recovered: true, .. } => builder
                .note("the string was closed at the end of the line")
                .help("add a closing `\"`"),
            LexError::UnterminatedString { recovered: false, .. } => {
                builder.help("add a closing `\"` before the end of the line")
            },
            LexError::MalformedNumber { .. } => builder
                .help("numbers are digits with at most one decimal point, and no trailing point"),
        };
        builder.build()
    }
}

/// Error loading or saving a [`LexerConfig`](crate::LexerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
