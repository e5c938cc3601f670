//! CLI argument parsing

use clap::Parser;
use crossterm::{terminal, tty::IsTty};
use std::io;
use std::path::PathBuf;

use crate::config::{DisplayConfig, DisplayConfigBuilder, DEFAULT_WIDTH};
use crate::error::SvaResult;

/// Parsed CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sva", version)]
#[command(about = "State vector analyzer: inspect FANN training data bit by bit")]
#[command(after_help = "Without a training file, training data is read via stdin.")]
pub struct Args {
    /// FANN training file
    pub input: Option<PathBuf>,

    /// Display width in columns (defaults to the terminal width)
    #[arg(short, long, env = "COLUMNS")]
    pub width: Option<usize>,

    /// Spectrogram height in magnitude steps
    #[arg(long)]
    pub height: Option<usize>,

    /// JSON file with display settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print spectrograms as JSON
    #[arg(long)]
    pub json: bool,

    /// Run a shell command and exit instead of prompting (can repeat)
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Display settings for the terminal on stdout
    pub fn display_config(&self) -> SvaResult<DisplayConfig> {
        self.display_config_for(terminal_width())
    }

    /// Display settings given the detected terminal width, if any.
    ///
    /// `--width` (or `COLUMNS`) wins over a config file, which wins over the
    /// terminal. Without any of them the width is [`DEFAULT_WIDTH`].
    pub fn display_config_for(&self, terminal_width: Option<usize>) -> SvaResult<DisplayConfig> {
        let base = match &self.config {
            Some(path) => DisplayConfig::from_json_file(path)?,
            None => DisplayConfig {
                max_width: terminal_width.unwrap_or(DEFAULT_WIDTH),
                ..DisplayConfig::default()
            },
        };

        let mut builder = DisplayConfigBuilder::from_config(base);
        if let Some(width) = self.width {
            builder = builder.width(width);
        }
        if let Some(height) = self.height {
            builder = builder.height(height);
        }
        builder.build()
    }
}

/// Column count of the terminal on stdout; `None` when stdout is redirected.
fn terminal_width() -> Option<usize> {
    if !io::stdout().is_tty() {
        return None;
    }
    match terminal::size() {
        Ok((columns, _rows)) if columns > 0 => Some(columns as usize),
        Ok(_) => None,
        Err(e) => {
            log::debug!("cannot query terminal size: {}", e);
            None
        }
    }
}
