//! sva - the state vector analyzer
//!
//! Inspects binary state-vector time series read from FANN training files.
//! Two views are offered: a nibble-grouped dump of a single state, and an
//! ASCII spectrogram of how one bit position flips over time.
//!
//! ## Spectrogram pipeline
//!
//! 1. The bit's 0/1 history is recoded to -1/+1 and transformed with a
//!    real-input FFT; the DC bin is zeroed.
//! 2. The magnitude spectrum is shrunk by pairwise averaging until it fits
//!    the column budget. The truncated ratio of original to final length is
//!    reported as the horizontal scale.
//! 3. The result is drawn as `#` bars with a one-symbol-per-column axis from
//!    an 84-symbol alphabet, `^` under every tied maximum, and a summary.
//!
//! Displayed column indices are approximate once downsampled: multiply by
//! the scale to estimate the original bin.
//!
//! ## Module Structure
//!
//! - `core` - Spectral analysis, downsampling, rendering, training file loading
//! - `cli` - Command-line interface and interactive shell
//! - `config` - Display budgets
//! - `error` - Error types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sva::core::StateAnalyzer;
//!
//! let mut analyzer = StateAnalyzer::builder().width(80).open("states.train")?;
//! print!("{}", analyzer.spectrogram(3)?);
//! ```

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Display configuration
pub mod config;

pub mod error;

// Re-export commonly used types at crate root for convenience
pub use crate::config::{DisplayConfig, DisplayConfigBuilder};
pub use crate::core::{
    downsample, magnitude_spectrum, AnalyzerBuilder, DownsampledSpectrum, MagnitudeSpectrum,
    PositionalEncoder, SpectralAnalyzer, Spectrogram, SpectrogramRenderer, SpectrumBin,
    StateAnalyzer, TrainingSet,
};
pub use crate::error::{SvaError, SvaResult};
