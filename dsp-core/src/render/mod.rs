//! Rendering collaborator boundary
//!
//! The numeric core hands the renderer ordered point sequences plus small
//! labeling metadata and knows nothing about how they are displayed.

pub mod gnuplot;

pub use gnuplot::GnuplotRenderer;

use crate::error::SignalError;
use crate::filters::FilterMode;

/// Output sink for one selection cycle
pub trait Renderer {
    /// Render the unmodified time-domain batch
    fn render_time_domain(&self, points: &[(f64, f64)]) -> Result<(), SignalError>;

    /// Render the positive-frequency magnitude spectrum, titled with the
    /// selected mode and annotated with its cutoff
    fn render_spectrum(
        &self,
        points: &[(f64, f64)],
        mode: FilterMode,
        cutoff_hz: f64,
    ) -> Result<(), SignalError>;
}
