//! exprkit CLI: build and validate expressions from the command line.
//!
//! Provides `exprkit check` for validating finished expressions, `exprkit vocab`
//! for listing the configured tokens, and `exprkit replay` for running an edit
//! script through a headless editor session.

#![warn(missing_docs)]

mod check;
mod project;
mod replay;
mod report;
mod vocab;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// exprkit: incremental expression building with structural validation.
#[derive(Parser, Debug)]
#[command(name = "exprkit", version, about = "Expression builder and validator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to an `exprkit.toml` file or the directory containing one.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one or more expressions.
    Check(CheckArgs),
    /// Print the parameter and operator lists.
    Vocab(VocabArgs),
    /// Run an edit script and report every saved expression.
    Replay(ReplayArgs),
}

/// Arguments for the `exprkit check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Expressions to validate.
    #[arg(required = true)]
    pub expressions: Vec<String>,

    /// Output format for the verdicts.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Accept `+`/`-` signs directly after an operator.
    #[arg(long)]
    pub signed_literals: bool,
}

/// Arguments for the `exprkit vocab` subcommand.
#[derive(Parser, Debug)]
pub struct VocabArgs {
    /// Output format for the lists.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `exprkit replay` subcommand.
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Edit script path, or `-` to read from stdin.
    pub script: String,

    /// Output format for the saved expressions.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a config file or directory.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.quiet, cli.verbose);

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Vocab(ref args) => vocab::run(args, &global),
        Command::Replay(ref args) => replay::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flag-derived level.
fn init_logging(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(quiet, verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_log_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}
