//! Conformance test helpers for the exprkit editor and validator.
//!
//! Provides shared functions that run expressions and edit sessions through
//! the public engine API and return structured results for assertion in
//! integration tests.

#![warn(missing_docs)]

use std::sync::Arc;

use exprkit_config::ExprkitConfig;
use exprkit_diagnostics::{Diagnostic, DiagnosticSink, Severity};
use exprkit_engine::{parse_script, run_script, Editor, SavedExpression, Validator};

/// Result of validating one expression.
pub struct CheckResult {
    /// The validity verdict.
    pub valid: bool,
    /// All diagnostics emitted by the validator.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl CheckResult {
    /// Returns `true` if a diagnostic with the given code number was emitted.
    pub fn has_code(&self, number: u16) -> bool {
        self.diagnostics.iter().any(|d| d.code.number == number)
    }
}

/// Creates a configuration from `exprkit.toml` text.
///
/// Panics if the text does not load, since a broken fixture is a test bug.
pub fn make_config(toml: &str) -> ExprkitConfig {
    match exprkit_config::load_config_from_str(toml) {
        Ok(config) => config,
        Err(e) => panic!("conformance config failed to load: {e}"),
    }
}

/// Validates `expression` against the built-in vocabulary and strict policy.
pub fn check(expression: &str) -> CheckResult {
    check_with_config(expression, &ExprkitConfig::default())
}

/// Validates `expression` under the given configuration.
pub fn check_with_config(expression: &str, config: &ExprkitConfig) -> CheckResult {
    let validator = Validator::new(Arc::new(config.vocabulary.clone()), &config.validation);
    let mut sink = DiagnosticSink::new();
    let valid = validator.check(expression, &mut sink);
    let diagnostics = sink.into_diagnostics();
    let error_count = count(&diagnostics, Severity::Error);
    let warning_count = count(&diagnostics, Severity::Warning);
    CheckResult {
        valid,
        diagnostics,
        error_count,
        warning_count,
    }
}

/// Creates an editor over the built-in configuration and inserts each token
/// in order.
pub fn type_tokens(tokens: &[&str]) -> Editor {
    let mut editor = Editor::default();
    for token in tokens {
        editor.insert(token);
    }
    editor
}

/// Parses and runs an edit script on a fresh default editor.
///
/// Returns every saved expression in order. Panics on a malformed script.
pub fn replay(script: &str) -> Vec<SavedExpression> {
    replay_with_config(script, &ExprkitConfig::default())
}

/// Parses and runs an edit script on a fresh editor built from `config`.
pub fn replay_with_config(script: &str, config: &ExprkitConfig) -> Vec<SavedExpression> {
    let commands = match parse_script(script) {
        Ok(commands) => commands,
        Err(e) => panic!("conformance script failed to parse: {e}"),
    };
    let mut editor = Editor::from_config(config);
    run_script(&mut editor, &commands)
}

fn count(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity == severity).count()
}
