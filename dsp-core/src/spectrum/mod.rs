//! Spectral transform and analysis

pub mod analysis;
pub mod dft;

pub use analysis::{SpectrumAnalysis, SpectrumAnalyzer};
pub use dft::{DftTransformer, Spectrum};
