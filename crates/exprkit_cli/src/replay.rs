//! `exprkit replay`: run an edit script through a headless editor.

use std::io::Read;

use exprkit_diagnostics::TerminalRenderer;
use exprkit_engine::{parse_script, run_script, Editor};
use tracing::info;

use crate::project::load_config;
use crate::report::{self, ExpressionReport};
use crate::{GlobalArgs, ReplayArgs, ReportFormat};

/// Runs the `exprkit replay` command.
///
/// Prints every saved expression with its verdict. Returns exit code 1 if
/// the last save was invalid, 0 otherwise (including when nothing was saved).
pub fn run(args: &ReplayArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    let source = read_script(&args.script)?;
    let commands = parse_script(&source)?;

    let mut editor = Editor::from_config(&config);
    let saves = run_script(&mut editor, &commands);
    info!(script = %args.script, saves = saves.len(), "replayed edit script");

    let reports: Vec<_> = saves
        .iter()
        .map(|s| ExpressionReport::new(s.sequence(), s.is_valid(), s.diagnostics()))
        .collect();

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            report::print_text(&reports, &renderer, global.quiet);
            if !global.quiet {
                let draft = editor.current_sequence();
                if !draft.is_empty() {
                    eprintln!("   Unsaved draft: {draft}");
                }
            }
        }
        ReportFormat::Json => report::print_json(&reports)?,
    }

    let last_invalid = saves.last().is_some_and(|s| !s.is_valid());
    Ok(if last_invalid { 1 } else { 0 })
}

fn read_script(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}
