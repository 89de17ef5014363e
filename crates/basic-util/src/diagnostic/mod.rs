//! Diagnostics for problems found in source text.
//!
//! A diagnostic is a severity, a message, a location and optional notes,
//! helps and code. Diagnostics are
//! delivered to a [`DiagnosticSink`] chosen by the caller, so the producer
//! never decides where they end up.
//!
//! # Examples
//!
//! ```
//! use basic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use basic_util::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized character")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod sink;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use codes::{
    E_LEXER_INVALID_NUMBER, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNKNOWN_TOKEN,
    E_LEXER_UNTERMINATED_STRING,
};
pub use sink::{DiagnosticSink, LogSink, NullSink};

use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// Levels are ordered from most to least severe.
///
/// ```
/// use basic_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert!(Level::Error < Level::Warning);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Input that could not be recognized
    Error,
    /// Input that was accepted with a caveat
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// One reported problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Extra context lines
    pub notes: Vec<String>,
    /// Suggested fixes
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Diagnostic with no code, notes or helps
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Error at `span`
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Warning at `span`
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Appends a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Returns true for error-level diagnostics
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// Renders the diagnostic in a compiler-style layout:
///
/// ```text
/// error[E1001]: unrecognized character "@" at position 6
///   --> 1:7
///   = help: remove it or replace it with a valid token
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span != Span::DUMMY {
            write!(f, "\n  --> {}", self.span)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Sink that keeps every diagnostic for later inspection.
///
/// A panicking handler aborts on the first error, which makes a test fail
/// at the offending token instead of at a later count check.
///
/// ```
/// use basic_util::diagnostic::{Diagnostic, Handler};
/// use basic_util::Span;
///
/// let mut handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("unterminated string", Span::DUMMY));
///
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
    /// Panic instead of recording an error
    panic_on_error: bool,
}

impl Handler {
    /// Creates an empty, recording handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handler that panics when an error arrives.
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: Vec::new(),
            panic_on_error: true,
        }
    }

    /// Records `diagnostic`.
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.is_error() {
            panic!("unexpected error diagnostic: {}", diagnostic);
        }
        self.diagnostics.push(diagnostic);
    }

    /// Starts an error at `span`; finish it with `.emit(&mut handler)`.
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Starts a warning at `span`.
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Whether at least one error was recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Errors recorded so far
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Warnings recorded so far
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    /// Recorded diagnostics, oldest first
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Forgets everything recorded
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl DiagnosticSink for Handler {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.emit_diagnostic(diagnostic);
    }
}
