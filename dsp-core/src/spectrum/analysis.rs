//! Magnitude/phase derivation from a (possibly masked) spectrum

use crate::spectrum::Spectrum;

/// Per-bin polar view of a spectrum
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumAnalysis {
    magnitude: Vec<f64>,
    phase_degrees: Vec<f64>,
}

impl SpectrumAnalysis {
    /// Number of analyzed bins
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    /// Check if the analysis holds no bins
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Magnitude per bin: `sqrt(re² + im²)`
    pub fn magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    /// Phase per bin in degrees
    pub fn phase_degrees(&self) -> &[f64] {
        &self.phase_degrees
    }

    /// (magnitude, phase-degrees) of bin `k`
    pub fn bin(&self, k: usize) -> (f64, f64) {
        (self.magnitude[k], self.phase_degrees[k])
    }
}

/// Derives per-bin magnitude and phase-in-degrees
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumAnalyzer;

impl SpectrumAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Analyze every bin of a spectrum
    ///
    /// `magnitude[k] = sqrt(re² + im²)`,
    /// `phase[k] = atan2(im, re)·180/π`. A fully zeroed coefficient
    /// yields phase 0, the `atan2(0, 0)` convention.
    pub fn analyze(&self, spectrum: &Spectrum) -> SpectrumAnalysis {
        let mut magnitude = Vec::with_capacity(spectrum.len());
        let mut phase_degrees = Vec::with_capacity(spectrum.len());

        for c in spectrum.bins() {
            magnitude.push(c.norm());
            phase_degrees.push(c.im.atan2(c.re).to_degrees());
        }

        SpectrumAnalysis {
            magnitude,
            phase_degrees,
        }
    }

    /// Positive-frequency (frequency, magnitude) points for rendering
    ///
    /// Restricted to bins `k ∈ [0, N/2)`; the aliased upper half never
    /// reaches the output side.
    pub fn half_spectrum_points(&self, spectrum: &Spectrum) -> Vec<(f64, f64)> {
        (0..spectrum.half_len())
            .map(|k| (spectrum.bin_frequency(k), spectrum.bin(k).norm()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn spectrum_of(bins: Vec<Complex64>) -> Spectrum {
        Spectrum::new(bins, 1000.0)
    }

    #[test]
    fn test_three_four_five() {
        let analyzer = SpectrumAnalyzer::new();
        let spectrum = spectrum_of(vec![Complex64::new(3.0, 4.0)]);

        let analysis = analyzer.analyze(&spectrum);
        let (magnitude, phase) = analysis.bin(0);

        assert!((magnitude - 5.0).abs() < 1e-12);
        assert!((phase - 53.13010235415598).abs() < 1e-9);
    }

    #[test]
    fn test_zeroed_coefficient_has_zero_phase() {
        let analyzer = SpectrumAnalyzer::new();
        let spectrum = spectrum_of(vec![Complex64::new(0.0, 0.0); 8]);

        let analysis = analyzer.analyze(&spectrum);

        for k in 0..8 {
            assert_eq!(analysis.bin(k), (0.0, 0.0));
        }
    }

    #[test]
    fn test_quadrant_signs() {
        let analyzer = SpectrumAnalyzer::new();
        let spectrum = spectrum_of(vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, -1.0),
        ]);

        let analysis = analyzer.analyze(&spectrum);

        assert!((analysis.phase_degrees()[0] - 0.0).abs() < 1e-12);
        assert!((analysis.phase_degrees()[1] - 90.0).abs() < 1e-12);
        assert!((analysis.phase_degrees()[2] - 180.0).abs() < 1e-12);
        assert!((analysis.phase_degrees()[3] + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_half_spectrum_points() {
        let analyzer = SpectrumAnalyzer::new();
        let bins: Vec<Complex64> = (0..8).map(|k| Complex64::new(k as f64, 0.0)).collect();
        let spectrum = spectrum_of(bins);

        let points = analyzer.half_spectrum_points(&spectrum);

        assert_eq!(points.len(), 4);
        assert_eq!(points[0], (0.0, 0.0));
        // f(k) = k * 1000 / 8
        assert_eq!(points[3], (375.0, 3.0));
    }
}
