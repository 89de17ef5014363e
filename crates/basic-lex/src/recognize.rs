//! Character predicates and lexeme recognizers.
//!
//! The recognizers validate a complete lexeme character by character. They
//! are what the classifier trusts, independently of how the scanner cut the
//! input, so each one spells out its acceptance rule instead of delegating
//! to a pattern engine.

/// Marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: &str = "REM";

/// Operator symbols, two-character forms first.
pub const OPERATORS: [&str; 10] = ["<>", "<=", ">=", "=", "+", "-", "*", "/", "<", ">"];

/// Delimiter symbols.
pub const DELIMITERS: [&str; 3] = ["(", ")", ","];

/// Whitespace skipped between lexemes: space, tab, line feed, carriage
/// return, vertical tab and form feed.
///
/// ```
/// use basic_lex::recognize::is_basic_whitespace;
///
/// assert!(is_basic_whitespace('\t'));
/// assert!(is_basic_whitespace('\n'));
/// assert!(!is_basic_whitespace('\u{A0}'));
/// ```
#[inline]
pub fn is_basic_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Characters that end a line. Comments and strings never cross them.
#[inline]
pub fn is_line_end(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Checks if a character can start an identifier: ASCII letter or `_`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: ASCII letter, digit
/// or `_`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Identifier recognizer.
///
/// Accepts a non-empty string whose first character is an ASCII letter or
/// underscore and whose remaining characters are ASCII letters, digits or
/// underscores.
///
/// ```
/// use basic_lex::recognize::is_identifier;
///
/// assert!(is_identifier("X"));
/// assert!(is_identifier("_tmp1"));
/// assert!(!is_identifier("1X"));
/// assert!(!is_identifier("ÄX"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_continue),
        _ => false,
    }
}

/// Numeric-literal recognizer.
///
/// A left-to-right scan with two flags. A digit sets `seen_digit`; a `.` is
/// accepted only while `seen_dot` is clear; any other character rejects.
/// The string is a number if a digit was seen and it does not end with `.`.
///
/// ```
/// use basic_lex::recognize::is_number;
///
/// assert!(is_number("10"));
/// assert!(is_number("3.14"));
/// assert!(is_number(".5"));
/// assert!(!is_number("3."));
/// assert!(!is_number("3.1.4"));
/// assert!(!is_number("."));
/// assert!(!is_number("1e5"));
/// ```
pub fn is_number(s: &str) -> bool {
    let mut seen_digit = false;
    let mut seen_dot = false;

    for c in s.chars() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' {
            if seen_dot {
                return false;
            }
            seen_dot = true;
        } else {
            return false;
        }
    }

    seen_digit && !s.ends_with('.')
}

/// A string literal: opening and closing `"` with no quote in between.
///
/// ```
/// use basic_lex::recognize::is_string_literal;
///
/// assert!(is_string_literal("\"Hello\""));
/// assert!(is_string_literal("\"\""));
/// assert!(!is_string_literal("\""));
/// assert!(!is_string_literal("\"a\"b\""));
/// ```
pub fn is_string_literal(s: &str) -> bool {
    s.len() >= 2
        && s.starts_with('"')
        && s.ends_with('"')
        && !s[1..s.len() - 1].contains('"')
}

/// A string literal missing its closing quote: an opening `"` followed by
/// characters that are neither quotes nor line ends.
///
/// ```
/// use basic_lex::recognize::is_unterminated_string;
///
/// assert!(is_unterminated_string("\"abc"));
/// assert!(is_unterminated_string("\""));
/// assert!(!is_unterminated_string("\"abc\""));
/// ```
pub fn is_unterminated_string(s: &str) -> bool {
    match s.strip_prefix('"') {
        Some(body) => !body.contains(|c: char| c == '"' || is_line_end(c)),
        None => false,
    }
}

/// Whether `s` starts with the comment marker.
///
/// ```
/// use basic_lex::recognize::starts_with_comment_marker;
///
/// assert!(starts_with_comment_marker("REM hi", false));
/// assert!(!starts_with_comment_marker("rem hi", false));
/// assert!(starts_with_comment_marker("rem hi", true));
/// ```
pub fn starts_with_comment_marker(s: &str, case_insensitive: bool) -> bool {
    match s.get(..COMMENT_MARKER.len()) {
        Some(prefix) if case_insensitive => prefix.eq_ignore_ascii_case(COMMENT_MARKER),
        Some(prefix) => prefix == COMMENT_MARKER,
        None => false,
    }
}

/// One of `<> <= >= = + - * / < >`.
pub fn is_operator(s: &str) -> bool {
    OPERATORS.contains(&s)
}

/// One of `( ) ,`.
pub fn is_delimiter(s: &str) -> bool {
    DELIMITERS.contains(&s)
}
