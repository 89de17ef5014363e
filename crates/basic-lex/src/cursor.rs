//! Character cursor for traversing source code.
//!
//! The [`Cursor`] keeps four coordinates in step: the byte position used to
//! slice the source, the character offset reported on tokens, and the
//! 1-based line and column used in diagnostics.

use basic_util::Span;

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use basic_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("LET X");
/// assert_eq!(cursor.current_char(), 'L');
/// cursor.advance_bytes(4);
/// assert_eq!(cursor.current_char(), 'X');
/// assert_eq!(cursor.offset(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current character offset in the source.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// A saved cursor location, used as the start of a [`Span`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte position
    pub position: usize,
    /// Character offset
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or '\0' at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character `n` characters ahead (0 = current), or '\0'
    /// past the end.
    ///
    /// ```
    /// use basic_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.peek_char(0), '<');
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, n: usize) -> char {
        self.remaining().chars().nth(n).unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.step(c);
        }
    }

    /// Advances over the next `count` bytes of source.
    ///
    /// `count` is clamped to the remaining input and must land on a
    /// character boundary; matchers only ever hand back lengths of whole
    /// characters.
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        while self.position < end {
            match self.remaining().chars().next() {
                Some(c) => self.step(c),
                None => break,
            }
        }
    }

    #[inline]
    fn step(&mut self, c: char) {
        self.position += c.len_utf8();
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances past every character satisfying `predicate`.
    ///
    /// ```
    /// use basic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\nPRINT");
    /// cursor.skip_while(|c| c.is_ascii_whitespace());
    /// assert_eq!(cursor.current_char(), 'P');
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.remaining().chars().next() {
            if !predicate(c) {
                break;
            }
            self.step(c);
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current character offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Saves the current location.
    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Span from `mark` to the current position.
    pub fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.position, self.position, mark.line, mark.column)
    }

    /// Source text from `mark` to the current position.
    pub fn slice_from(&self, mark: Mark) -> &'a str {
        &self.source[mark.position..self.position]
    }

    /// Source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
