//! A single problem found in an expression.

use exprkit_common::Span;
use serde::Serialize;

use crate::code::DiagnosticCode;
use crate::severity::Severity;

/// A problem located in a one-line expression.
///
/// `span` marks the offending characters and `label` is printed under them.
/// `related` points at other characters that explain the problem, such as
/// the bracket that a wrong closer was meant to match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Copied from `code` so JSON consumers need not decode it.
    pub severity: Severity,
    /// What kind of problem this is.
    pub code: DiagnosticCode,
    /// One-line summary.
    pub message: String,
    /// The offending characters.
    pub span: Span,
    /// Text shown under `span`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Other characters worth pointing at.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<Related>,
    /// Background on why the rule exists.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// How to fix the expression.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub help: Vec<String>,
}

/// A secondary location inside the same expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Related {
    /// Where.
    pub span: Span,
    /// Why it matters.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic whose severity comes from `code`.
    pub fn new(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: code.severity,
            code,
            message: message.into(),
            span,
            label: None,
            related: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Sets the text printed under the offending characters.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Points at another location that explains the problem.
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(Related {
            span,
            message: message.into(),
        });
        self
    }

    /// Adds a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Returns `true` if this diagnostic rejects the expression.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
