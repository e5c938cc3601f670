// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;
mod shell;

pub use args::Args;
pub use output::{error_line, format_help, format_json, format_spectrogram, warning_line};
pub use shell::{Command, CommandError, Shell, ShellState};

use anyhow::{Context, Result};
use std::io;

use crate::core::StateAnalyzer;

/// Run the CLI: load the training data, then serve commands
pub fn run(args: Args) -> Result<()> {
    let config = args
        .display_config()
        .context("invalid display settings")?;
    let builder = StateAnalyzer::builder().config(config);

    let analyzer = match &args.input {
        Some(path) => builder
            .open(path)
            .with_context(|| format!("error reading training file '{}'", path.display()))?,
        None => builder
            .read("<stdin>", io::stdin().lock())
            .context("error reading training data from stdin")?,
    };

    let training = analyzer.training();
    for warning in &training.warnings {
        eprintln!("{}", warning_line(warning));
    }
    log::info!("loaded {} from {}", training.summary(), training.source);
    println!("{}", training.summary());

    let mut shell = Shell::new(analyzer, io::stdin().lock(), io::stdout().lock(), io::stderr())
        .json(args.json);

    if args.commands.is_empty() {
        shell.run()?;
    } else {
        for line in &args.commands {
            if shell.execute_line(line)? == ShellState::Exiting {
                break;
            }
        }
    }

    Ok(())
}
