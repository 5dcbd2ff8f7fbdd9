//! One filter-selection cycle: transform → mask → analyze
//!
//! Every cycle starts from the unmodified sample batch; no filtering
//! accumulates across cycles.

use log::debug;

use crate::config::FilterConfig;
use crate::filters::{FilterMode, FrequencyMask};
use crate::signal::SampleBuffer;
use crate::spectrum::{DftTransformer, Spectrum, SpectrumAnalysis, SpectrumAnalyzer};

/// Products of one selection cycle
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Unmasked spectrum of the input batch
    pub spectrum: Spectrum,

    /// Spectrum with out-of-band coefficients zeroed
    pub masked: Spectrum,

    /// Per-bin magnitude and phase of the masked spectrum
    pub analysis: SpectrumAnalysis,

    /// Positive-frequency (frequency, magnitude) points for rendering
    pub spectrum_points: Vec<(f64, f64)>,

    /// Mode the cycle ran with
    pub mode: FilterMode,

    /// Cutoff the mask applied, in Hz
    pub cutoff_hz: f64,
}

/// Runs the numeric pipeline for one filter selection
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    config: FilterConfig,
    transformer: DftTransformer,
    analyzer: SpectrumAnalyzer,
}

impl FilterPipeline {
    /// Create a pipeline for the given run configuration
    pub fn new(config: FilterConfig) -> Self {
        Self {
            transformer: DftTransformer::new(config.sample_rate),
            analyzer: SpectrumAnalyzer::new(),
            config,
        }
    }

    /// Run configuration
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Run transform → mask → analyze over an unmodified sample batch
    pub fn run(&self, samples: &SampleBuffer, mode: FilterMode) -> PipelineOutput {
        let mask = FrequencyMask::from_config(&self.config, mode);

        debug!(
            "transforming {} samples at {} Hz",
            samples.len(),
            self.config.sample_rate
        );
        let spectrum = self.transformer.transform(samples);

        debug!("applying {} mask at {} Hz", mode.label(), mask.cutoff_hz());
        let masked = mask.apply(&spectrum);

        let analysis = self.analyzer.analyze(&masked);
        let spectrum_points = self.analyzer.half_spectrum_points(&masked);

        PipelineOutput {
            spectrum,
            masked,
            analysis,
            spectrum_points,
            mode,
            cutoff_hz: mask.cutoff_hz(),
        }
    }
}
