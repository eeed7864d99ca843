//! Whether a diagnostic rejects the expression or only flags it.

use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The expression is valid but contains a suspicious construct.
    Warning,
    /// The expression is invalid.
    Error,
}

impl Severity {
    /// The letter that starts codes of this severity: `E` or `W`.
    pub fn code_prefix(self) -> char {
        match self {
            Severity::Warning => 'W',
            Severity::Error => 'E',
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_and_names() {
        assert_eq!(Severity::Error.code_prefix(), 'E');
        assert_eq!(Severity::Warning.code_prefix(), 'W');
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    }
}
