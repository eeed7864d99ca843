//! `exprkit vocab`: list the tokens offered to the user.

use exprkit_common::Vocabulary;

use crate::project::load_config;
use crate::{GlobalArgs, ReportFormat, VocabArgs};

/// Runs the `exprkit vocab` command. Always returns exit code 0.
pub fn run(args: &VocabArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    match args.format {
        ReportFormat::Text => print!("{}", render_text(&config.vocabulary)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&config.vocabulary)?),
    }
    Ok(0)
}

fn render_text(vocab: &Vocabulary) -> String {
    let sections = [
        ("parameters", &vocab.parameters),
        ("arithmetic operators", &vocab.arithmetic_operators),
        ("condition operators", &vocab.condition_operators),
    ];
    sections
        .iter()
        .map(|(title, items)| format!("{title:<22}{}\n", items.join(" ")))
        .collect()
}
