//! Token definitions.

use std::fmt;

/// Reserved words, in their canonical uppercase form.
pub const KEYWORDS: [&str; 10] = [
    "IF", "THEN", "PRINT", "GOTO", "FOR", "NEXT", "LET", "REM", "INPUT", "END",
];

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of [`KEYWORDS`]
    Keyword,
    /// A name such as `X` or `total_1`
    Identifier,
    /// Numeric literal: `10`, `3.14`, `.5`
    Number,
    /// Double-quoted literal, quotes included
    String,
    /// `<> <= >= = + - * / < >`
    Operator,
    /// `( ) ,`
    Delimiter,
    /// `REM` and the rest of its line
    Comment,
    /// Anything no rule accepts
    Unknown,
}

impl TokenKind {
    /// Uppercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme.
///
/// Tokens are immutable once built. `offset` is the zero-based character
/// index of the first character of the lexeme.
///
/// ```
/// use basic_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Keyword, "PRINT", 3);
/// assert_eq!(token.to_string(), "[KEYWORD: PRINT] at position 3");
/// assert_eq!(token.end_offset(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    offset: usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// Token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Token text. Keywords are uppercase; everything else is verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character offset of the first character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false for tokens produced by the lexer.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character offset one past the last character.
    pub fn end_offset(&self) -> usize {
        self.offset + self.len()
    }

    /// Whether no rule accepted the lexeme.
    pub fn is_unknown(&self) -> bool {
        self.kind == TokenKind::Unknown
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}] at position {}", self.kind, self.text, self.offset)
    }
}

/// Looks up a keyword, ignoring case, and returns its canonical form.
///
/// ```
/// use basic_lex::keyword_from_ident;
///
/// assert_eq!(keyword_from_ident("goto"), Some("GOTO"));
/// assert_eq!(keyword_from_ident("Let"), Some("LET"));
/// assert_eq!(keyword_from_ident("PRINTX"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .copied()
        .find(|keyword| keyword.eq_ignore_ascii_case(ident))
}
