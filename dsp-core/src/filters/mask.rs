//! Pass-band masking of spectral coefficients

use num_complex::Complex64;

use crate::config::FilterConfig;
use crate::spectrum::Spectrum;

/// Pass-band selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep bins at or below the cutoff frequency
    LowPass,

    /// Keep bins at or above the cutoff frequency
    HighPass,
}

impl FilterMode {
    /// Human-readable label used for plot titles
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::LowPass => "Low-Pass",
            FilterMode::HighPass => "High-Pass",
        }
    }
}

/// Zeroes spectral coefficients outside the configured pass-band
#[derive(Debug, Clone, Copy)]
pub struct FrequencyMask {
    mode: FilterMode,
    cutoff_hz: f64,
}

impl FrequencyMask {
    /// Create a mask with an explicit cutoff in Hz
    pub fn new(mode: FilterMode, cutoff_hz: f64) -> Self {
        Self { mode, cutoff_hz }
    }

    /// Create a mask using the configured cutoff for `mode`
    pub fn from_config(config: &FilterConfig, mode: FilterMode) -> Self {
        Self::new(mode, config.cutoff_for(mode))
    }

    /// Selected filter mode
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Cutoff frequency in Hz
    pub fn cutoff_hz(&self) -> f64 {
        self.cutoff_hz
    }

    /// Return a new spectrum with out-of-band coefficients set to zero
    ///
    /// Comparison is strict: a bin whose frequency equals the cutoff is
    /// kept in both modes. The `k · rate / N` mapping runs over the full
    /// index range, so upper-half bins are compared at their unaliased
    /// frequency rather than the negative-frequency alias; the rendering
    /// side only consumes the lower half.
    pub fn apply(&self, spectrum: &Spectrum) -> Spectrum {
        let bins = spectrum
            .bins()
            .iter()
            .enumerate()
            .map(|(k, &c)| {
                let frequency = spectrum.bin_frequency(k);
                let rejected = match self.mode {
                    FilterMode::LowPass => frequency > self.cutoff_hz,
                    FilterMode::HighPass => frequency < self.cutoff_hz,
                };

                if rejected {
                    Complex64::new(0.0, 0.0)
                } else {
                    c
                }
            })
            .collect();

        Spectrum::new(bins, spectrum.sample_rate())
    }
}
