//! Snapshots of saved expressions.

use exprkit_diagnostics::Diagnostic;
use serde::Serialize;

/// An immutable snapshot of a draft taken at save time, with its verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SavedExpression {
    sequence: String,
    valid: bool,
    diagnostics: Vec<Diagnostic>,
}

impl SavedExpression {
    pub(crate) fn new(sequence: String, valid: bool, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            sequence,
            valid,
            diagnostics,
        }
    }

    /// The saved character sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The validity verdict.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Diagnostics produced while validating: the rejection reason when
    /// invalid, warnings otherwise.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterates over warning diagnostics only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}
