//! basic-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the BASIC front end:
//!
//! - [`span`] - source locations (byte range plus line/column)
//! - [`diagnostic`] - diagnostics, codes, and the sinks that receive them
//!
//! Diagnostics are never printed by the producing phase. A phase takes a
//! `&mut dyn DiagnosticSink` and the caller picks the destination: a
//! collecting [`Handler`], the silent [`NullSink`], the `log`-backed
//! [`LogSink`], or a closure.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, DiagnosticSink, Handler, Level, LogSink,
    NullSink,
};
pub use span::Span;
