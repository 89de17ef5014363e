//! Scanner module.
//!
//! The scanner cuts the input into candidate lexemes. Each piece is a
//! matcher that looks at the unread input and answers with a byte length or
//! no match:
//! - `comment` - `REM` to the end of the line
//! - `string` - double-quoted literal on one line
//! - `number` - digits with an optional fraction
//! - `word` - identifier or keyword
//! - `operator` - relational pairs, then single-character symbols
//!
//! `core` tries them in that order and falls back to a one-character
//! lexeme when none applies.

mod comment;
mod core;
mod number;
mod operator;
mod string;
mod word;

pub use self::core::{Lexeme, LexemeClass, Scanner};
