//! Digital Signal Processing utilities

mod downsampler;
mod spectrum;

pub use downsampler::{downsample, DownsampledSpectrum};
pub use spectrum::{MagnitudeSpectrum, SpectrumBin};

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};

use crate::error::{SvaError, SvaResult};

/// Recode a 0/1 history as -1/+1 so the mean bias does not swamp the chart.
pub fn bipolar(history: &[u8]) -> Vec<f64> {
    history
        .iter()
        .map(|&bit| if bit == 0 { -1.0 } else { 1.0 })
        .collect()
}

/// Spectral analyzer for bit histories
///
/// Holds a real-input FFT planner so repeated analyses of the same history
/// length reuse the plan.
pub struct SpectralAnalyzer {
    planner: RealFftPlanner<f64>,
}

impl SpectralAnalyzer {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::new(),
        }
    }

    /// Non-redundant half of the transform of the bipolar signal.
    ///
    /// Returns `N / 2 + 1` complex bins for a history of length `N`.
    pub fn transform(&mut self, history: &[u8]) -> SvaResult<Vec<Complex<f64>>> {
        if history.is_empty() {
            return Err(SvaError::InvalidInput(
                "cannot analyze an empty value history".to_string(),
            ));
        }

        let r2c = self.planner.plan_fft_forward(history.len());
        let mut input = bipolar(history);
        let mut output = r2c.make_output_vec();

        r2c.process(&mut input, &mut output)
            .map_err(|e| SvaError::Transform(e.to_string()))?;

        Ok(output)
    }

    /// Magnitude spectrum with the DC bin forced to zero
    pub fn magnitude_spectrum(&mut self, history: &[u8]) -> SvaResult<MagnitudeSpectrum> {
        let bins = self.transform(history)?;

        let spectrum = MagnitudeSpectrum::from_magnitudes(
            bins.iter()
                .enumerate()
                .map(|(i, c)| if i == 0 { 0.0 } else { c.norm() }),
        );

        log::debug!(
            "analyzed {} samples into {} bins",
            history.len(),
            spectrum.len()
        );

        Ok(spectrum)
    }
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot spectrum without keeping a planner around.
pub fn magnitude_spectrum(history: &[u8]) -> SvaResult<MagnitudeSpectrum> {
    SpectralAnalyzer::new().magnitude_spectrum(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::FftPlanner;

    #[test]
    fn test_alternating_history_peaks_at_nyquist() {
        let history: [u8; 8] = [1, 0, 1, 0, 1, 0, 1, 0];
        assert_eq!(bipolar(&history), vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);

        let spectrum = magnitude_spectrum(&history).unwrap();
        assert_eq!(spectrum.len(), 5);
        assert_eq!(spectrum.bins()[0].magnitude, 0.0);
        assert_eq!(spectrum.maxima(), vec![4]);
        assert!((spectrum.bins()[4].magnitude - 8.0).abs() < 1e-9);
        for bin in &spectrum.bins()[1..4] {
            assert!(bin.magnitude < 1e-9);
        }
    }

    #[test]
    fn test_spectrum_length_and_dc_for_all_lengths() {
        let mut analyzer = SpectralAnalyzer::new();
        for n in 1..=67usize {
            let history: Vec<u8> = (0..n).map(|i| ((i * 7 + i / 3) % 2) as u8).collect();
            let spectrum = analyzer.magnitude_spectrum(&history).unwrap();
            assert_eq!(spectrum.len(), n / 2 + 1, "length for N={}", n);
            assert_eq!(spectrum.bins()[0].magnitude, 0.0, "DC for N={}", n);
            assert!(spectrum.magnitudes().all(|m| m >= 0.0));
        }
    }

    #[test]
    fn test_constant_history_is_flat() {
        // all energy of a constant signal sits in the removed DC bin
        let spectrum = magnitude_spectrum(&[1u8; 16]).unwrap();
        assert!(spectrum.magnitudes().all(|m| m < 1e-9));
    }

    #[test]
    fn test_empty_history_rejected() {
        assert!(matches!(
            magnitude_spectrum(&[]),
            Err(SvaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_matches_complex_fft() {
        let history: Vec<u8> = vec![1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1];
        let spectrum = magnitude_spectrum(&history).unwrap();

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(history.len());
        let mut buffer: Vec<rustfft::num_complex::Complex<f64>> = bipolar(&history)
            .into_iter()
            .map(|s| rustfft::num_complex::Complex::new(s, 0.0))
            .collect();
        fft.process(&mut buffer);

        for (bin, reference) in spectrum.bins().iter().zip(buffer.iter()).skip(1) {
            assert!((bin.magnitude - reference.norm()).abs() < 1e-9);
        }
    }
}
