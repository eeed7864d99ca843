//! Terminal output for diagnostics about a one-line expression.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Renders diagnostics rustc-style under the expression they describe.
///
/// ```text
/// error[E105]: operator '+' follows operator '+'
///   |
///   | age++1
///   |     ^ operator follows another operator
///   |    - previous operator
///   = help: put an operand between the two operators
/// ```
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    /// Creates a renderer; `color` enables ANSI styling of the header.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renders `diag`, found in `source`, as newline-terminated lines.
    pub fn render(&self, diag: &Diagnostic, source: &str) -> String {
        let mut out = format!("{}: {}\n", self.header(diag), diag.message);

        let len = source.chars().count();
        if !diag.span.is_dummy() && diag.span.start <= len {
            out.push_str("  |\n");
            out.push_str(&format!("  | {source}\n"));
            out.push_str(&underline(
                diag.span.start,
                "^".repeat(diag.span.len().max(1)),
                diag.label.as_deref(),
            ));
            for rel in diag.related.iter().filter(|r| r.span.start <= len) {
                out.push_str(&underline(
                    rel.span.start,
                    "-".repeat(rel.span.len().max(1)),
                    Some(&rel.message),
                ));
            }
        }

        for note in &diag.notes {
            out.push_str(&format!("  = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("  = help: {help}\n"));
        }
        out
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let head = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return head;
        }
        let style = match diag.severity {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
        };
        format!("\x1b[{style}m{head}\x1b[0m")
    }
}

fn underline(start: usize, marks: String, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("  | {}{marks} {text}\n", " ".repeat(start)),
        None => format!("  | {}{marks}\n", " ".repeat(start)),
    }
}
