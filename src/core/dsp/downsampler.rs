//! Lossy spectrum shrinking by pairwise averaging

use serde::Serialize;

use super::spectrum::{MagnitudeSpectrum, SpectrumBin};
use crate::error::{SvaError, SvaResult};

/// Spectrum reduced to a column budget, with its horizontal scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownsampledSpectrum {
    pub spectrum: MagnitudeSpectrum,
    /// `original_len / spectrum.len()`, truncated. A displayed column `c`
    /// corresponds roughly to bin `c * scale_factor`.
    pub scale_factor: usize,
    pub original_len: usize,
}

impl DownsampledSpectrum {
    /// Wrap a spectrum that needs no shrinking.
    pub fn unscaled(spectrum: MagnitudeSpectrum) -> Self {
        let original_len = spectrum.len();
        Self {
            spectrum,
            scale_factor: 1,
            original_len,
        }
    }

    pub fn len(&self) -> usize {
        self.spectrum.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectrum.is_empty()
    }
}

/// One averaging pass: positions (0,1), (2,3), ... collapse into their mean,
/// keyed by the later position. An odd trailing entry is dropped.
fn halve(spectrum: &MagnitudeSpectrum) -> MagnitudeSpectrum {
    let bins = spectrum.bins();
    MagnitudeSpectrum::from_bins(
        (1..bins.len())
            .step_by(2)
            .map(|i| SpectrumBin {
                index: i,
                magnitude: (bins[i - 1].magnitude + bins[i].magnitude) / 2.0,
            })
            .collect(),
    )
}

/// Shrink `spectrum` until it has at most `max_columns` entries.
///
/// A spectrum that already fits comes back unchanged with a scale of 1.
pub fn downsample(spectrum: MagnitudeSpectrum, max_columns: usize) -> SvaResult<DownsampledSpectrum> {
    if max_columns == 0 {
        return Err(SvaError::InvalidInput(
            "column budget must be at least 1".to_string(),
        ));
    }

    let original_len = spectrum.len();
    if original_len <= max_columns {
        return Ok(DownsampledSpectrum::unscaled(spectrum));
    }

    let mut current = spectrum;
    let mut passes = 0;
    while current.len() > max_columns {
        let next = halve(&current);
        assert!(
            next.len() < current.len(),
            "averaging pass did not shrink spectrum of {} entries",
            current.len()
        );
        current = next;
        passes += 1;
    }

    let scale_factor = original_len / current.len();
    log::debug!(
        "downsampled {} bins to {} columns in {} passes (scale {}x)",
        original_len,
        current.len(),
        passes,
        scale_factor
    );

    Ok(DownsampledSpectrum {
        spectrum: current,
        scale_factor,
        original_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> MagnitudeSpectrum {
        MagnitudeSpectrum::from_magnitudes((0..len).map(|i| if i == 0 { 0.0 } else { i as f64 }))
    }

    #[test]
    fn test_fitting_spectrum_is_untouched() {
        let spectrum = ramp(10);
        let result = downsample(spectrum.clone(), 10).unwrap();
        assert_eq!(result.spectrum, spectrum);
        assert_eq!(result.scale_factor, 1);
        assert_eq!(result.original_len, 10);

        let result = downsample(spectrum.clone(), 56).unwrap();
        assert_eq!(result.spectrum, spectrum);
        assert_eq!(result.scale_factor, 1);
    }

    #[test]
    fn test_single_pass_averages_pairs() {
        let spectrum = MagnitudeSpectrum::from_magnitudes(vec![0.0, 4.0, 2.0, 6.0, 1.0]);
        let result = downsample(spectrum, 2).unwrap();

        // 5 entries -> pairs (0,1), (2,3); entry 4 is dropped
        let bins = result.spectrum.bins();
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0], SpectrumBin { index: 1, magnitude: 2.0 });
        assert_eq!(bins[1], SpectrumBin { index: 3, magnitude: 4.0 });
        assert_eq!(result.scale_factor, 2);
    }

    #[test]
    fn test_130_bins_into_56_columns() {
        let result = downsample(ramp(130), 56).unwrap();
        let final_len = result.len();
        assert!(final_len <= 56);
        assert_eq!(final_len, 32);
        assert_eq!(result.scale_factor, 130 / final_len);
        assert_eq!(result.scale_factor, 4);
    }

    #[test]
    fn test_budget_and_truncation_hold_for_all_sizes() {
        for len in 1..=200usize {
            for width in [1usize, 2, 3, 7, 20, 56, 84, 150] {
                let result = downsample(ramp(len), width).unwrap();
                assert!(result.len() <= width, "len {} width {}", len, width);
                assert!(result.len() >= 1);
                assert!(result.scale_factor * result.len() <= len);
            }
        }
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(matches!(
            downsample(ramp(4), 0),
            Err(SvaError::InvalidInput(_))
        ));
    }
}
