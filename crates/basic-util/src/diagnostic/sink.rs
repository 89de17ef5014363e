//! Destinations for emitted diagnostics.
//!
//! Producers only see `&mut dyn DiagnosticSink`; what happens to a
//! diagnostic afterwards is up to the caller:
//!
//! - [`Handler`](super::Handler) collects them for later inspection
//! - [`NullSink`] drops them
//! - [`LogSink`] forwards them to the `log` facade
//! - any `FnMut(Diagnostic)` closure receives them directly

use super::{Diagnostic, Level};

/// Receiver of diagnostics.
///
/// ```
/// use basic_util::diagnostic::{Diagnostic, DiagnosticSink};
/// use basic_util::Span;
///
/// let mut seen = Vec::new();
/// let mut sink = |d: Diagnostic| seen.push(d.message);
/// sink.emit(Diagnostic::error("oops", Span::DUMMY));
/// drop(sink);
/// assert_eq!(seen, vec!["oops".to_string()]);
/// ```
pub trait DiagnosticSink {
    /// Accepts one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(Diagnostic),
{
    fn emit(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to the `log` facade.
///
/// Errors are logged at `error`, warnings at `warn`, notes and helps at
/// `info`. Nothing is printed unless the application installs a logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Error => log::error!("{}", diagnostic),
            Level::Warning => log::warn!("{}", diagnostic),
            Level::Note | Level::Help => log::info!("{}", diagnostic),
        }
    }
}
