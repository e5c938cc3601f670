// src/config/display.rs
//
// Display budgets shared by the shell and the renderers. Passed explicitly
// at call time; nothing here is process-global.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::visualization::SYMBOL_COUNT;
use crate::error::{SvaError, SvaResult};

/// Width used when the terminal size is unknown
pub const DEFAULT_WIDTH: usize = 56;
/// Vertical budget of the spectrogram chart
pub const DEFAULT_HEIGHT: usize = 20;

/// Complete display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum line width in columns
    pub max_width: usize,
    /// Number of magnitude steps in the spectrogram
    pub spectrogram_height: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_WIDTH,
            spectrogram_height: DEFAULT_HEIGHT,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> SvaResult<()> {
        if self.max_width == 0 {
            return Err(SvaError::InvalidInput("width must be at least 1".to_string()));
        }
        if self.spectrogram_height == 0 {
            return Err(SvaError::InvalidInput(
                "spectrogram height must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Column budget for spectrograms.
    ///
    /// The axis can only label as many columns as there are positional
    /// symbols, so wider displays are capped at that count.
    pub fn spectrum_columns(&self) -> usize {
        self.max_width.min(SYMBOL_COUNT)
    }

    /// Note to log when [`spectrum_columns`](Self::spectrum_columns) caps the width
    pub fn column_cap_notice(&self) -> Option<String> {
        (self.max_width > SYMBOL_COUNT).then(|| {
            format!(
                "display width {} exceeds the {} axis symbols; spectrograms use {} columns",
                self.max_width, SYMBOL_COUNT, SYMBOL_COUNT
            )
        })
    }

    /// Column the help descriptions start at
    pub fn help_column(&self) -> usize {
        self.max_width / 3
    }

    pub fn from_json_file(path: &Path) -> SvaResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for customized display configs
#[derive(Debug, Clone, Default)]
pub struct DisplayConfigBuilder {
    config: DisplayConfig,
}

impl DisplayConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.config.max_width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.config.spectrogram_height = height;
        self
    }

    pub fn build(self) -> SvaResult<DisplayConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
