//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range in the source with the 1-based line and
//! column where that range begins.
//!
//! # Examples
//!
//! ```
//! use basic_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of the start (for human-readable output)
///
/// # Examples
///
/// ```
/// use basic_util::span::Span;
///
/// let span = Span::new(4, 9, 2, 1);
/// assert_eq!(span.start, 4);
/// assert_eq!(span.line, 2);
///
/// let point = Span::point(1, 5);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// ```
    /// use basic_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span contains a byte offset
    ///
    /// ```
    /// use basic_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The line and column are taken from whichever span starts first.
    ///
    /// ```
    /// use basic_util::span::Span;
    ///
    /// let a = Span::new(10, 20, 1, 11);
    /// let b = Span::new(25, 35, 2, 3);
    /// let merged = a.merge(b);
    /// assert_eq!((merged.start, merged.end), (10, 35));
    /// assert_eq!((merged.line, merged.column), (1, 11));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Returns the source text covered by this span, if it lies on
    /// character boundaries inside `source`.
    ///
    /// ```
    /// use basic_util::span::Span;
    ///
    /// let span = Span::new(4, 5, 1, 5);
    /// assert_eq!(span.source_text("LET X = 1"), Some("X"));
    /// assert_eq!(Span::new(4, 50, 1, 5).source_text("LET X"), None);
    /// ```
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
