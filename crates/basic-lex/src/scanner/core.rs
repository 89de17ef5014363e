//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the lexeme it yields and the
//! ordered matcher table.

use basic_util::Span;

use super::{comment, number, operator, string, word};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::recognize::is_basic_whitespace;

/// Inspects the unread input and returns the byte length of the lexeme it
/// recognizes at the front, if any.
type Matcher = fn(&str, &LexerConfig) -> Option<usize>;

/// Which matcher produced a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeClass {
    /// `REM` to the end of the line
    Comment,
    /// Quoted literal, possibly unterminated under the extending policy
    String,
    /// Digits with optional fraction
    Number,
    /// Identifier or keyword
    Word,
    /// `<>`, `<=`, `>=`
    Relational,
    /// One-character operator or delimiter
    Single,
    /// A character no matcher accepted
    Stray,
}

/// First match wins.
const MATCHERS: [(LexemeClass, Matcher); 6] = [
    (LexemeClass::Comment, comment::match_comment),
    (LexemeClass::String, string::match_string),
    (LexemeClass::Number, number::match_number),
    (LexemeClass::Word, word::match_word),
    (LexemeClass::Relational, operator::match_relational),
    (LexemeClass::Single, operator::match_single),
];

/// A candidate lexeme cut from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// Raw text, borrowed from the input
    pub text: &'a str,
    /// Character offset of the first character
    pub offset: usize,
    /// Byte range and line/column of the text
    pub span: Span,
    /// Matcher that produced it
    pub class: LexemeClass,
}

/// Splits input into lexemes, skipping whitespace.
///
/// # Example
///
/// ```
/// use basic_lex::Scanner;
///
/// let texts: Vec<&str> = Scanner::new("IF X<>1 THEN").map(|l| l.text).collect();
/// assert_eq!(texts, ["IF", "X", "<>", "1", "THEN"]);
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    config: LexerConfig,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default configuration.
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    /// Creates a scanner with an explicit configuration.
    pub fn with_config(input: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
        }
    }

    /// Returns the next lexeme, or `None` once only whitespace remains.
    ///
    /// Every call that returns a lexeme consumes at least one character.
    pub fn next_lexeme(&mut self) -> Option<Lexeme<'a>> {
        self.cursor.skip_while(is_basic_whitespace);
        if self.cursor.is_at_end() {
            return None;
        }

        let rest = self.cursor.remaining();
        let (class, len) = MATCHERS
            .iter()
            .find_map(|&(class, matcher)| {
                matcher(rest, &self.config)
                    .filter(|&len| len > 0)
                    .map(|len| (class, len))
            })
            .unwrap_or_else(|| (LexemeClass::Stray, first_char_len(rest)));

        let mark = self.cursor.mark();
        self.cursor.advance_bytes(len);

        Some(Lexeme {
            text: self.cursor.slice_from(mark),
            offset: mark.offset,
            span: self.cursor.span_from(mark),
            class,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

fn first_char_len(rest: &str) -> usize {
    rest.chars().next().map_or(1, char::len_utf8)
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
