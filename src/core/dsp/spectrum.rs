//! Magnitude spectrum container

use serde::Serialize;

/// One (index, magnitude) entry of a spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumBin {
    /// Frequency bin, or for downsampled spectra the later position of the
    /// averaged pair in the previous pass
    pub index: usize,
    pub magnitude: f64,
}

/// Ordered sequence of spectrum entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct MagnitudeSpectrum {
    bins: Vec<SpectrumBin>,
}

impl MagnitudeSpectrum {
    /// Build from plain magnitudes, numbering bins from zero.
    pub fn from_magnitudes(magnitudes: impl IntoIterator<Item = f64>) -> Self {
        Self {
            bins: magnitudes
                .into_iter()
                .enumerate()
                .map(|(index, magnitude)| SpectrumBin { index, magnitude })
                .collect(),
        }
    }

    pub fn from_bins(bins: Vec<SpectrumBin>) -> Self {
        Self { bins }
    }

    pub fn bins(&self) -> &[SpectrumBin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpectrumBin> {
        self.bins.iter()
    }

    pub fn magnitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.bins.iter().map(|b| b.magnitude)
    }

    /// Largest magnitude, `None` for an empty spectrum
    pub fn max_magnitude(&self) -> Option<f64> {
        self.magnitudes().reduce(f64::max)
    }

    /// Indices of every entry whose magnitude equals the maximum exactly.
    pub fn maxima(&self) -> Vec<usize> {
        match self.max_magnitude() {
            Some(max) => self
                .bins
                .iter()
                .filter(|b| b.magnitude == max)
                .map(|b| b.index)
                .collect(),
            None => Vec::new(),
        }
    }
}
