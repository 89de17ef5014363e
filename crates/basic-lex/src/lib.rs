//! basic-lex - Lexical Analyzer for a small BASIC dialect
//!
//! This crate turns BASIC source text into a flat list of classified tokens.
//! Each token carries its kind, its text and the character offset where it
//! starts.
//!
//! # Example Usage
//!
//! ```
//! use basic_lex::{tokenize_with, TokenKind};
//! use basic_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = tokenize_with("LET X = 10\nPRINT X", &mut handler);
//!
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! assert_eq!(tokens[4].to_string(), "[KEYWORD: PRINT] at position 11");
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`scanner`] - splits input into lexemes
//! - [`classify`] - assigns a token kind to each lexeme
//! - [`lexer`] - drives both and reports diagnostics
//! - [`recognize`] - character predicates and lexeme recognizers
//! - [`token`] - token definitions and the keyword table
//! - [`cursor`] - character cursor for source traversal
//! - [`config`] - tunable behaviour, loadable from TOML
//!
//! # Token Categories
//!
//! - **Keyword**: `IF THEN PRINT GOTO FOR NEXT LET REM INPUT END`, any case,
//!   reported in uppercase
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Number**: `10`, `3.14`
//! - **String**: `"Hello"`, quotes included
//! - **Operator**: `<> <= >= = + - * / < >`
//! - **Delimiter**: `( ) ,`
//! - **Comment**: `REM` and the rest of its line
//! - **Unknown**: anything else, reported as a diagnostic
//!
//! Tokenization never fails. Problems are reported to a
//! [`DiagnosticSink`](basic_util::DiagnosticSink) and the offending text still
//! appears in the output as an Unknown token.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod recognize;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

use basic_util::{DiagnosticSink, LogSink};

// Re-export main types for convenience
pub use classify::{classify, Classifier};
pub use config::{LexerConfig, UnterminatedStringPolicy, CONFIG_FILE_NAME};
pub use cursor::Cursor;
pub use error::{ConfigError, ConfigResult, LexError};
pub use lexer::{Lexer, Tokenizer};
pub use recognize::{is_identifier, is_number};
pub use scanner::{Lexeme, LexemeClass, Scanner};
pub use token::{keyword_from_ident, Token, TokenKind, KEYWORDS};

static_assertions::assert_impl_all!(Token: Send, Sync);
static_assertions::assert_impl_all!(TokenKind: Send, Sync);
static_assertions::assert_impl_all!(Lexeme<'static>: Send, Sync);
static_assertions::assert_impl_all!(LexerConfig: Send, Sync);
static_assertions::assert_impl_all!(Classifier: Send, Sync);
static_assertions::assert_impl_all!(Tokenizer: Send, Sync);

/// Tokenizes `input` with the default configuration.
///
/// Diagnostics are forwarded to the `log` facade.
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with(input, &mut LogSink)
}

/// Tokenizes `input` with the default configuration, reporting problems to
/// `sink`.
pub fn tokenize_with(input: &str, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    Tokenizer::default().tokenize(input, sink)
}
