//! Spectral Filter - Direct-DFT Frequency Filtering Core
//!
//! Transforms one fixed batch of time-domain samples with a direct DFT,
//! zeroes spectral coefficients outside a low-pass or high-pass band, and
//! derives per-bin magnitude and phase for rendering.

pub mod config;
pub mod error;
pub mod filters;
pub mod pipeline;
pub mod render;
pub mod signal;
pub mod spectrum;

pub use config::FilterConfig;
pub use error::SignalError;
pub use filters::{FilterMode, FrequencyMask};
pub use pipeline::{FilterPipeline, PipelineOutput};
pub use signal::SampleBuffer;
pub use spectrum::{DftTransformer, Spectrum, SpectrumAnalysis, SpectrumAnalyzer};
