//! `exprkit check`: validate finished expressions.

use std::sync::Arc;

use exprkit_diagnostics::{DiagnosticSink, TerminalRenderer};
use exprkit_engine::Validator;

use crate::project::load_config;
use crate::report::{self, ExpressionReport};
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `exprkit check` command.
///
/// Every expression is validated independently. Returns exit code 0 if all
/// of them are valid, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    let mut validation = config.validation;
    validation.signed_literals |= args.signed_literals;
    let validator = Validator::new(Arc::new(config.vocabulary), &validation);

    let results: Vec<_> = args
        .expressions
        .iter()
        .map(|expr| {
            let mut sink = DiagnosticSink::new();
            let valid = validator.check(expr, &mut sink);
            (expr.as_str(), valid, sink.into_diagnostics())
        })
        .collect();
    let reports: Vec<_> = results
        .iter()
        .map(|(expr, valid, diags)| ExpressionReport::new(expr, *valid, diags))
        .collect();

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            report::print_text(&reports, &renderer, global.quiet);
        }
        ReportFormat::Json => report::print_json(&reports)?,
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!("   Result: {} valid, {} invalid", reports.len() - invalid, invalid);
    }

    Ok(if invalid == 0 { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprkit_config::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    fn global_with_config(dir: &TempDir) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            color: false,
            config: Some(dir.path().to_str().unwrap().to_string()),
        }
    }

    fn check_args(expressions: &[&str], signed_literals: bool) -> CheckArgs {
        CheckArgs {
            expressions: expressions.iter().map(|e| e.to_string()).collect(),
            format: ReportFormat::Json,
            signed_literals,
        }
    }

    #[test]
    fn check_end_to_end_exit_codes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "").unwrap();
        let global = global_with_config(&tmp);

        let all_valid = run(&check_args(&["(age+1)>salary", ""], false), &global);
        assert_eq!(all_valid.unwrap(), 0);

        let one_invalid = run(&check_args(&["age+1", "(debt"], false), &global);
        assert_eq!(one_invalid.unwrap(), 1);
    }

    #[test]
    fn check_uses_config_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[validation]\nsigned_literals = true\n",
        )
        .unwrap();
        let global = global_with_config(&tmp);

        assert_eq!(run(&check_args(&["age+-1"], false), &global).unwrap(), 0);
        assert_eq!(run(&check_args(&["age++"], false), &global).unwrap(), 1);
    }

    #[test]
    fn signed_literals_flag_overrides_strict_config() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("strict.toml");
        fs::write(&file, "[validation]\nsigned_literals = false\n").unwrap();
        let global = GlobalArgs {
            quiet: true,
            color: false,
            config: Some(file.to_str().unwrap().to_string()),
        };

        assert_eq!(run(&check_args(&["age+-1"], false), &global).unwrap(), 1);
        assert_eq!(run(&check_args(&["age+-1"], true), &global).unwrap(), 0);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let global = global_with_config(&tmp);
        let err = run(&check_args(&["age"], false), &global).unwrap_err();
        assert!(err.to_string().starts_with("cannot read "));
    }

    #[test]
    fn invalid_vocabulary_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[vocabulary]\nparameters = [\"age2\"]\n",
        )
        .unwrap();
        let err = run(&check_args(&["age"], false), &global_with_config(&tmp)).unwrap_err();
        assert!(err.to_string().starts_with("invalid vocabulary: "));
    }
}
