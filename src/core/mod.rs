//! Core analysis and rendering modules

pub mod analyzer;
pub mod dsp;
pub mod training;
pub mod visualization;

pub use analyzer::{AnalyzerBuilder, StateAnalyzer};
pub use dsp::{downsample, magnitude_spectrum, DownsampledSpectrum, MagnitudeSpectrum, SpectralAnalyzer, SpectrumBin};
pub use training::TrainingSet;
pub use visualization::{PositionalEncoder, Spectrogram, SpectrogramRenderer};
