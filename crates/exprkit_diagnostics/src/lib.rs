//! Structured diagnostics for expression validation.
//!
//! A failed verdict is explained by a [`Diagnostic`] carrying a
//! [`DiagnosticCode`] and a [`Span`](exprkit_common::Span) into the
//! expression. A [`DiagnosticSink`] collects them during one check and the
//! [`TerminalRenderer`] formats them under the expression text.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::DiagnosticCode;
pub use diagnostic::{Diagnostic, Related};
pub use renderer::TerminalRenderer;
pub use severity::Severity;
pub use sink::DiagnosticSink;
