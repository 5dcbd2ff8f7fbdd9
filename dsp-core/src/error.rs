//! Error types for the filtering pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("time and amplitude sequences differ in length ({time} vs {amplitude})")]
    LengthMismatch { time: usize, amplitude: usize },

    #[error("data source yielded no valid samples")]
    NoSamples,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch gnuplot: {0}")]
    PlotterSpawn(String),
}
