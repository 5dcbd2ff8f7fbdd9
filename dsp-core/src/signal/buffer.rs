//! Time-domain sample storage
//!
//! One immutable batch of uniformly sampled (time, amplitude) pairs.
//! The batch is read once from the data source and never mutated; every
//! filter-selection cycle starts from it unchanged.

use crate::error::SignalError;

/// Length-checked batch of (time, amplitude) pairs
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    time: Vec<f64>,
    amplitude: Vec<f64>,
}

impl SampleBuffer {
    /// Create a buffer from parallel time and amplitude sequences
    ///
    /// # Errors
    /// Returns `SignalError::LengthMismatch` if the sequences differ in
    /// length.
    pub fn new(time: Vec<f64>, amplitude: Vec<f64>) -> Result<Self, SignalError> {
        if time.len() != amplitude.len() {
            return Err(SignalError::LengthMismatch {
                time: time.len(),
                amplitude: amplitude.len(),
            });
        }

        Ok(Self { time, amplitude })
    }

    /// Build a buffer with implicit sample times `0, 1/rate, 2/rate, ...`
    pub fn from_amplitudes(amplitude: Vec<f64>, sample_rate: f64) -> Self {
        let time = (0..amplitude.len())
            .map(|i| i as f64 / sample_rate)
            .collect();

        Self { time, amplitude }
    }

    /// Number of samples actually held
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    /// Check if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }

    /// Sample times in seconds
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Sample amplitudes
    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    /// Iterate over (time, amplitude) pairs
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time
            .iter()
            .zip(self.amplitude.iter())
            .map(|(&t, &a)| (t, a))
    }
}
