//! Direct DFT of a real-valued sample batch
//!
//! Computes the transform by definition in O(N²). Batches are small and
//! the quadratic cost is intentional; no factorized fast transform here.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::signal::SampleBuffer;

/// Complex frequency-domain representation of one sample batch
///
/// Carries the sampling rate so bins can be mapped to Hz without
/// re-threading configuration through every stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex64>,
    sample_rate: f64,
}

impl Spectrum {
    pub(crate) fn new(bins: Vec<Complex64>, sample_rate: f64) -> Self {
        Self { bins, sample_rate }
    }

    /// Number of bins (equals the transformed batch length)
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the spectrum holds no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// All complex coefficients, indexed by bin
    pub fn bins(&self) -> &[Complex64] {
        &self.bins
    }

    /// Coefficient of bin `k`
    pub fn bin(&self, k: usize) -> Complex64 {
        self.bins[k]
    }

    /// Sampling rate of the source batch in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Frequency in Hz of bin `k`: `k · rate / N`
    ///
    /// The mapping covers the whole index range; upper-half bins are
    /// reported past Nyquist, not at their negative-frequency alias.
    pub fn bin_frequency(&self, k: usize) -> f64 {
        k as f64 * self.sample_rate / self.bins.len() as f64
    }

    /// Number of positive-frequency bins handed to rendering (N/2)
    pub fn half_len(&self) -> usize {
        self.bins.len() / 2
    }
}

/// Direct O(N²) DFT engine
#[derive(Debug, Clone, Copy)]
pub struct DftTransformer {
    sample_rate: f64,
}

impl DftTransformer {
    /// Create a transformer for batches sampled at `sample_rate` Hz
    pub fn new(sample_rate: f64) -> Self {
        Self { sample_rate }
    }

    /// Transform a sample batch into its complex spectrum
    ///
    /// `real[k] = Σₙ a[n]·cos(2πkn/N)`, `imag[k] = −Σₙ a[n]·sin(2πkn/N)`,
    /// accumulated in ascending `n`. Pure: the input buffer is untouched
    /// and identical inputs give identical spectra.
    pub fn transform(&self, samples: &SampleBuffer) -> Spectrum {
        let total = samples.len();
        let amplitude = samples.amplitude();
        let mut bins = Vec::with_capacity(total);

        for k in 0..total {
            let mut sum = Complex64::new(0.0, 0.0);
            for (n, &a) in amplitude.iter().enumerate() {
                let angle = 2.0 * PI * (k * n) as f64 / total as f64;
                sum.re += a * angle.cos();
                sum.im -= a * angle.sin();
            }
            bins.push(sum);
        }

        Spectrum::new(bins, self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_batch(total: usize, cycles: usize) -> SampleBuffer {
        let amplitude: Vec<f64> = (0..total)
            .map(|n| (2.0 * PI * cycles as f64 * n as f64 / total as f64).sin())
            .collect();
        SampleBuffer::from_amplitudes(amplitude, 1000.0)
    }

    #[test]
    fn test_all_zero_input() {
        let transformer = DftTransformer::new(1000.0);
        let samples = SampleBuffer::from_amplitudes(vec![0.0; 64], 1000.0);

        let spectrum = transformer.transform(&samples);

        assert_eq!(spectrum.len(), 64);
        for c in spectrum.bins() {
            assert_eq!(c.re, 0.0);
            assert_eq!(c.im, 0.0);
        }
    }

    #[test]
    fn test_dc_input_concentrates_at_bin_zero() {
        let transformer = DftTransformer::new(1000.0);
        let c = 2.5;
        let total = 64;
        let samples = SampleBuffer::from_amplitudes(vec![c; total], 1000.0);

        let spectrum = transformer.transform(&samples);

        let dc = spectrum.bin(0);
        assert!((dc.re - c * total as f64).abs() < 1e-9);
        assert!(dc.im.abs() < 1e-9);

        // All remaining bins carry negligible energy
        let tolerance = 1e-3 * c * total as f64;
        for k in 1..total {
            assert!(
                spectrum.bin(k).norm() < tolerance,
                "bin {} magnitude {}",
                k,
                spectrum.bin(k).norm()
            );
        }
    }

    #[test]
    fn test_bin_aligned_sinusoid() {
        let transformer = DftTransformer::new(1000.0);
        let total = 128;
        let k0 = 8;
        let spectrum = transformer.transform(&sine_batch(total, k0));

        // sin at bin k0 puts N/2 magnitude at k0 and N-k0
        let expected = total as f64 / 2.0;
        assert!((spectrum.bin(k0).norm() - expected).abs() < 1e-6);
        assert!((spectrum.bin(total - k0).norm() - expected).abs() < 1e-6);

        for k in 0..total {
            if k == k0 || k == total - k0 {
                continue;
            }
            assert!(
                spectrum.bin(k).norm() < 1e-6,
                "leakage at bin {}: {}",
                k,
                spectrum.bin(k).norm()
            );
        }
    }

    #[test]
    fn test_conjugate_symmetry_for_real_input() {
        let transformer = DftTransformer::new(1000.0);
        let amplitude: Vec<f64> = (0..32).map(|n| (n as f64 * 0.37).cos() + 0.2).collect();
        let spectrum = transformer.transform(&SampleBuffer::from_amplitudes(amplitude, 1000.0));

        for k in 1..32 {
            let a = spectrum.bin(k);
            let b = spectrum.bin(32 - k);
            assert!((a.re - b.re).abs() < 1e-9);
            assert!((a.im + b.im).abs() < 1e-9);
        }
    }

    #[test]
    fn test_transform_is_deterministic() {
        let transformer = DftTransformer::new(1000.0);
        let samples = sine_batch(64, 5);

        let first = transformer.transform(&samples);
        let second = transformer.transform(&samples);

        assert_eq!(first, second);
    }

    #[test]
    fn test_bin_frequency_mapping() {
        let transformer = DftTransformer::new(1000.0);
        let spectrum = transformer.transform(&SampleBuffer::from_amplitudes(vec![0.0; 128], 1000.0));

        assert_eq!(spectrum.bin_frequency(0), 0.0);
        assert!((spectrum.bin_frequency(1) - 7.8125).abs() < 1e-12);
        // Upper-half bins map past Nyquist, on purpose
        assert!((spectrum.bin_frequency(127) - 992.1875).abs() < 1e-12);
        assert_eq!(spectrum.half_len(), 64);
    }
}
