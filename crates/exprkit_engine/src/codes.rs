//! Diagnostic codes emitted by the validator.

use exprkit_diagnostics::DiagnosticCode;

/// A character outside the allowed set.
pub const INVALID_CHARACTER: DiagnosticCode = DiagnosticCode::error(101, "invalid-character");

/// A closing bracket with no opener left to match.
pub const UNMATCHED_CLOSE: DiagnosticCode = DiagnosticCode::error(102, "unmatched-close");

/// A closing bracket of the wrong kind for the innermost opener.
pub const MISMATCHED_BRACKET: DiagnosticCode = DiagnosticCode::error(103, "mismatched-bracket");

/// An opening bracket that is never closed.
pub const UNCLOSED_BRACKET: DiagnosticCode = DiagnosticCode::error(104, "unclosed-bracket");

/// Two arithmetic operators with no operand between them.
pub const ADJACENT_OPERATORS: DiagnosticCode = DiagnosticCode::error(105, "adjacent-operators");

/// A multi-character condition operator touching an arithmetic operator.
pub const CONDITION_OPERATOR_ADJACENCY: DiagnosticCode =
    DiagnosticCode::warning(1, "condition-operator-adjacency");

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [DiagnosticCode; 6] = [
        INVALID_CHARACTER,
        UNMATCHED_CLOSE,
        MISMATCHED_BRACKET,
        UNCLOSED_BRACKET,
        ADJACENT_OPERATORS,
        CONDITION_OPERATOR_ADJACENCY,
    ];

    #[test]
    fn codes_display() {
        assert_eq!(format!("{INVALID_CHARACTER}"), "E101");
        assert_eq!(format!("{ADJACENT_OPERATORS}"), "E105");
        assert_eq!(format!("{CONDITION_OPERATOR_ADJACENCY}"), "W001");
    }

    #[test]
    fn codes_and_names_unique() {
        let shown: HashSet<_> = ALL.iter().map(|c| c.to_string()).collect();
        let names: HashSet<_> = ALL.iter().map(|c| c.name).collect();
        assert_eq!(shown.len(), ALL.len());
        assert_eq!(names.len(), ALL.len());
    }
}
