// src/core/analyzer.rs
//
// High-level state vector analysis API with builder pattern.

use std::io::BufRead;
use std::path::Path;

use super::dsp::{downsample, SpectralAnalyzer};
use super::training::TrainingSet;
use super::visualization::{state_dump, symbol_table, Spectrogram, SpectrogramRenderer};
use crate::config::DisplayConfig;
use crate::error::SvaResult;

/// Builder for StateAnalyzer configuration
#[derive(Default)]
pub struct AnalyzerBuilder {
    config: DisplayConfig,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: DisplayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.config.max_width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.config.spectrogram_height = height;
        self
    }

    /// Load a training file from disk
    pub fn open<P: AsRef<Path>>(self, path: P) -> SvaResult<StateAnalyzer> {
        let training = TrainingSet::open(path.as_ref())?;
        self.build(training)
    }

    /// Load training data from an already open reader, e.g. stdin
    pub fn read<R: BufRead>(self, source: &str, reader: R) -> SvaResult<StateAnalyzer> {
        let training = TrainingSet::parse(source, reader)?;
        self.build(training)
    }

    pub fn build(self, training: TrainingSet) -> SvaResult<StateAnalyzer> {
        self.config.validate()?;
        if let Some(notice) = self.config.column_cap_notice() {
            log::info!("{}", notice);
        }
        Ok(StateAnalyzer {
            renderer: SpectrogramRenderer::new(self.config.spectrogram_height),
            training,
            config: self.config,
            spectral: SpectralAnalyzer::new(),
        })
    }
}

/// Loaded state vectors plus the display budgets to show them with
pub struct StateAnalyzer {
    training: TrainingSet,
    config: DisplayConfig,
    spectral: SpectralAnalyzer,
    renderer: SpectrogramRenderer,
}

impl StateAnalyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn training(&self) -> &TrainingSet {
        &self.training
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Nibble dump of one state vector
    pub fn state_lines(&self, index: usize) -> SvaResult<Vec<String>> {
        let bits = self.training.state(index)?;
        Ok(state_dump(index, bits, self.config.max_width))
    }

    /// Spectrogram of how one bit flips over the recorded states
    pub fn spectrogram(&mut self, bit: usize) -> SvaResult<Spectrogram> {
        let history = self.training.value_history(bit)?;
        let spectrum = self.spectral.magnitude_spectrum(&history)?;
        let downsampled = downsample(spectrum, self.config.spectrum_columns())?;
        self.renderer.render(&downsampled)
    }

    pub fn table_lines(&self) -> Vec<String> {
        symbol_table(self.config.max_width)
    }
}
