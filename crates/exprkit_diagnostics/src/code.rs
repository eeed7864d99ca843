//! Stable identifiers for the problems the validator reports.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::severity::Severity;

/// A diagnostic code such as `E105`, paired with a kebab-case rule name.
///
/// The severity is part of the code: every `E` code rejects the expression
/// and every `W` code leaves the verdict alone. Serializes as its display
/// form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DiagnosticCode {
    /// Severity of every diagnostic carrying this code.
    pub severity: Severity,
    /// Number shown after the prefix, zero-padded to three digits.
    pub number: u16,
    /// Rule name, e.g. `adjacent-operators`.
    pub name: &'static str,
}

impl DiagnosticCode {
    /// An error code.
    pub const fn error(number: u16, name: &'static str) -> Self {
        Self {
            severity: Severity::Error,
            number,
            name,
        }
    }

    /// A warning code.
    pub const fn warning(number: u16, name: &'static str) -> Self {
        Self {
            severity: Severity::Warning,
            number,
            name,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.severity.code_prefix(), self.number)
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_number() {
        assert_eq!(DiagnosticCode::error(101, "x").to_string(), "E101");
        assert_eq!(DiagnosticCode::warning(1, "y").to_string(), "W001");
    }

    #[test]
    fn serializes_as_display() {
        let code = DiagnosticCode::error(104, "unclosed-bracket");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"E104\"");
    }
}
