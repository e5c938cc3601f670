// src/error.rs
//
// Error hierarchy shared by the library modules.

use thiserror::Error;

/// Root error type for all library failures.
#[derive(Error, Debug)]
pub enum SvaError {
    /// Input rejected before any work was done (empty history, zero budget).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Positional alphabet lookup outside [0, 84).
    #[error("no symbol for {index} (alphabet has {capacity} symbols)")]
    SymbolOutOfRange { index: usize, capacity: usize },

    /// More spectrogram columns than the axis alphabet can label.
    #[error("{columns} columns cannot be labelled with {capacity} axis symbols")]
    AxisOverflow { columns: usize, capacity: usize },

    /// Header line is not `num_states vector_width num_outputs`.
    #[error("'{0}' does not appear to be a FANN training file")]
    NotATrainingFile(String),

    /// Malformed input vector line.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("there is no state {index} ({count} states loaded)")]
    NoSuchState { index: usize, count: usize },

    #[error("there is no bit {index} (vectors are {width} bits wide)")]
    NoSuchBit { index: usize, width: usize },

    /// FFT backend failure.
    #[error("transform failed: {0}")]
    Transform(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type SvaResult<T> = Result<T, SvaError>;
