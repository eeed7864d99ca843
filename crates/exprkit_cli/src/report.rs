//! Output of validation verdicts in text and JSON form.

use exprkit_diagnostics::{Diagnostic, TerminalRenderer};
use serde::Serialize;

/// The verdict on one expression, as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct ExpressionReport<'a> {
    /// The validated sequence.
    pub expression: &'a str,
    /// Whether it passed validation.
    pub valid: bool,
    /// Everything the validator reported about it.
    pub diagnostics: Vec<DiagnosticReport<'a>>,
}

/// A diagnostic together with its rule name.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport<'a> {
    /// Kebab-case rule name, e.g. `adjacent-operators`.
    pub rule: &'static str,
    /// The diagnostic itself.
    #[serde(flatten)]
    pub diagnostic: &'a Diagnostic,
}

impl<'a> ExpressionReport<'a> {
    /// Builds a report for `expression` from its verdict and diagnostics.
    pub fn new(expression: &'a str, valid: bool, diagnostics: &'a [Diagnostic]) -> Self {
        let diagnostics = diagnostics
            .iter()
            .map(|diagnostic| DiagnosticReport {
                rule: diagnostic.code.name,
                diagnostic,
            })
            .collect();
        Self {
            expression,
            valid,
            diagnostics,
        }
    }
}

/// Prints reports as a pretty JSON array on stdout.
pub fn print_json(reports: &[ExpressionReport<'_>]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

/// Prints reports for the terminal on stdout.
pub fn print_text(reports: &[ExpressionReport<'_>], renderer: &TerminalRenderer, quiet: bool) {
    print!("{}", render_all(reports, renderer, quiet));
}

/// Renders every report in order. With `quiet`, valid expressions are left
/// out.
pub fn render_all(
    reports: &[ExpressionReport<'_>],
    renderer: &TerminalRenderer,
    quiet: bool,
) -> String {
    reports
        .iter()
        .filter(|r| !(quiet && r.valid))
        .map(|r| render_text(r, renderer))
        .collect()
}

/// Renders one report for the terminal.
///
/// The verdict line goes first, followed by each diagnostic.
pub fn render_text(report: &ExpressionReport<'_>, renderer: &TerminalRenderer) -> String {
    let verdict = if report.valid { "valid" } else { "invalid" };
    let mut out = format!("{verdict}: {}\n", display_expression(report.expression));
    for entry in &report.diagnostics {
        out.push_str(&renderer.render(entry.diagnostic, report.expression));
    }
    out
}

fn display_expression(expression: &str) -> &str {
    if expression.is_empty() {
        "(empty)"
    } else {
        expression
    }
}
