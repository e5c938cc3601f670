//! Output formatting for shell results

use colorful::Colorful;

use crate::config::DisplayConfig;
use crate::core::visualization::{Spectrogram, SYMBOL_COUNT};
use crate::error::SvaResult;

/// Usage forms and descriptions, in help order
pub fn command_help() -> Vec<(&'static str, String)> {
    vec![
        ("state [statenum]", "display a state vector".to_string()),
        ("fft [bitnum]", "do Fourier analysis on a bit".to_string()),
        ("table", format!("show base {} table", SYMBOL_COUNT)),
        ("help", "show this message".to_string()),
        ("quit", "exit this shell".to_string()),
    ]
}

/// Help text with descriptions aligned at a third of the width
pub fn format_help(config: &DisplayConfig) -> Vec<String> {
    let column = config.help_column();
    command_help()
        .into_iter()
        .map(|(usage, description)| format!("{:<column$}{}", usage, description, column = column))
        .collect()
}

/// One-line list of command names
pub fn format_command_list() -> String {
    let names: Vec<&str> = command_help()
        .iter()
        .filter_map(|(usage, _)| usage.split_whitespace().next())
        .collect();
    format!("commands: {}", names.join(", "))
}

pub fn format_spectrogram(chart: &Spectrogram) -> String {
    chart.to_string()
}

/// Format a spectrogram as JSON
pub fn format_json(chart: &Spectrogram) -> SvaResult<String> {
    Ok(serde_json::to_string_pretty(chart)?)
}

pub fn error_line(message: impl std::fmt::Display) -> String {
    format!("error: {}", message).as_str().red().to_string()
}

pub fn warning_line(message: impl std::fmt::Display) -> String {
    format!("warning: {}", message).as_str().yellow().to_string()
}
