// src/core/visualization/spectrogram.rs
//
// ASCII bar-chart rendering of a (downsampled) magnitude spectrum.

use serde::Serialize;
use std::fmt;

use super::symbols::{PositionalEncoder, SYMBOL_COUNT};
use crate::config::DEFAULT_HEIGHT;
use crate::core::dsp::{DownsampledSpectrum, MagnitudeSpectrum};
use crate::error::{SvaError, SvaResult};

const FILLED: char = '#';
const BLANK: char = ' ';
const MAX_MARKER: char = '^';

/// Rendered spectrogram, ready to print line by line.
#[derive(Debug, Clone, Serialize)]
pub struct Spectrogram {
    /// Bar rows, tallest threshold first
    pub rows: Vec<String>,
    /// One positional symbol per column
    pub axis: String,
    /// `^` under each column holding the maximum
    pub markers: String,
    pub max_magnitude: f64,
    pub vertical_scale: usize,
    pub horizontal_scale: usize,
    /// Spectrum indices of every column tied for the maximum
    pub maxima: Vec<usize>,
    pub spectrum: MagnitudeSpectrum,
}

impl Spectrogram {
    pub fn scale_line(&self) -> String {
        format!("scale: {}x", self.horizontal_scale)
    }

    pub fn maxima_line(&self) -> String {
        let label = if self.maxima.len() > 1 {
            "frequencies"
        } else {
            "frequency"
        };
        let indices: Vec<String> = self.maxima.iter().map(|i| i.to_string()).collect();
        format!("{} with maximum magnitude: {}", label, indices.join(", "))
    }
}

impl fmt::Display for Spectrogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        writeln!(f, "{}", self.axis)?;
        writeln!(f, "{}", self.markers)?;
        writeln!(f, "{}", self.scale_line())?;
        writeln!(f, "{}", self.maxima_line())
    }
}

/// Turns spectra into [`Spectrogram`]s of a fixed height budget.
#[derive(Debug, Clone)]
pub struct SpectrogramRenderer {
    height: usize,
    encoder: PositionalEncoder,
}

impl Default for SpectrogramRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT)
    }
}

impl SpectrogramRenderer {
    pub fn new(height: usize) -> Self {
        Self {
            height,
            encoder: PositionalEncoder,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `max(1, floor(max_magnitude / height))`
    pub fn vertical_scale(&self, max_magnitude: f64) -> usize {
        ((max_magnitude / self.height as f64).floor() as usize).max(1)
    }

    /// Draw one row per threshold from `floor(max)` down to 1 inclusive,
    /// stepping by the vertical scale. At vertical scale 1 the bottom row is
    /// threshold 1, so every column with magnitude at least 1 shows a `#`.
    pub fn render(&self, downsampled: &DownsampledSpectrum) -> SvaResult<Spectrogram> {
        let spectrum = &downsampled.spectrum;

        if self.height == 0 {
            return Err(SvaError::InvalidInput(
                "spectrogram height must be at least 1".to_string(),
            ));
        }
        if spectrum.is_empty() {
            return Err(SvaError::InvalidInput(
                "cannot render an empty spectrum".to_string(),
            ));
        }
        if spectrum.len() > self.encoder.capacity() {
            return Err(SvaError::AxisOverflow {
                columns: spectrum.len(),
                capacity: SYMBOL_COUNT,
            });
        }

        let max_magnitude = spectrum.max_magnitude().unwrap_or(0.0);
        let vertical_scale = self.vertical_scale(max_magnitude);
        let top = max_magnitude.floor() as usize;

        let rows: Vec<String> = (1..=top)
            .rev()
            .step_by(vertical_scale)
            .map(|threshold| {
                spectrum
                    .magnitudes()
                    .map(|m| if m >= threshold as f64 { FILLED } else { BLANK })
                    .collect::<String>()
            })
            .collect();

        let axis = (0..spectrum.len())
            .map(|n| self.encoder.encode(n))
            .collect::<SvaResult<String>>()?;

        let markers: String = spectrum
            .magnitudes()
            .map(|m| if m == max_magnitude { MAX_MARKER } else { BLANK })
            .collect();

        Ok(Spectrogram {
            rows,
            axis,
            markers,
            max_magnitude,
            vertical_scale,
            horizontal_scale: downsampled.scale_factor,
            maxima: spectrum.maxima(),
            spectrum: spectrum.clone(),
        })
    }
}
