//! Run configuration for the filtering pipeline

use crate::filters::FilterMode;

/// Fixed-per-run parameters consumed by the pipeline
///
/// Supplied once by the surrounding application; never reloaded mid-run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// Maximum number of samples read from the data source
    pub sample_capacity: usize,

    /// Sampling rate in Hz
    pub sample_rate: f64,

    /// Low-pass cutoff frequency in Hz
    pub low_pass_cutoff: f64,

    /// High-pass cutoff frequency in Hz
    pub high_pass_cutoff: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sample_capacity: 128,
            sample_rate: 1000.0,
            low_pass_cutoff: 50.0,
            high_pass_cutoff: 200.0,
        }
    }
}

impl FilterConfig {
    /// Cutoff frequency for the given filter mode
    pub fn cutoff_for(&self, mode: FilterMode) -> f64 {
        match mode {
            FilterMode::LowPass => self.low_pass_cutoff,
            FilterMode::HighPass => self.high_pass_cutoff,
        }
    }
}
