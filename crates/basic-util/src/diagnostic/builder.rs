//! Step-by-step construction of a [`Diagnostic`].

use super::{Diagnostic, DiagnosticCode, DiagnosticSink, Level, Span};

/// Accumulates the parts of a diagnostic. The span defaults to
/// [`Span::DUMMY`] until one is given.
///
/// # Examples
///
/// ```
/// use basic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use basic_util::Span;
///
/// let diag = DiagnosticBuilder::error("unrecognized character")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(6, 7, 1, 7))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.span.column, 7);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic of any level.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Starts an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Starts a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attaches a code such as `E1001`.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Points the diagnostic at `span`.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Appends a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Appends a help line.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finishes the diagnostic.
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Finishes the diagnostic and hands it to `sink`.
    ///
    /// ```
    /// use basic_util::diagnostic::{DiagnosticBuilder, Handler};
    /// use basic_util::Span;
    ///
    /// let mut handler = Handler::new();
    /// DiagnosticBuilder::error("unknown token \"$$\" at position 3")
    ///     .span(Span::DUMMY)
    ///     .emit(&mut handler);
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit<S: DiagnosticSink + ?Sized>(self, sink: &mut S) {
        sink.emit(self.build());
    }
}
