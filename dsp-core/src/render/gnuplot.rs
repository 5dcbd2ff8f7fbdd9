//! Gnuplot-backed renderer
//!
//! Writes plain-text data files and drives `gnuplot -persistent` through
//! a child-process pipe.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::warn;

use super::Renderer;
use crate::error::SignalError;
use crate::filters::FilterMode;

/// Renderer that plots through an external gnuplot process
#[derive(Debug, Clone)]
pub struct GnuplotRenderer {
    output_dir: PathBuf,
    sample_rate: f64,
}

impl GnuplotRenderer {
    /// Create a renderer writing data files into `output_dir`
    ///
    /// `sample_rate` bounds the spectrum plot's frequency axis at Nyquist.
    pub fn new<P: AsRef<Path>>(output_dir: P, sample_rate: f64) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            sample_rate,
        }
    }

    fn write_points(&self, name: &str, points: &[(f64, f64)]) -> Result<PathBuf, SignalError> {
        let path = self.output_dir.join(name);
        let mut file = File::create(&path)?;

        for &(x, y) in points {
            writeln!(file, "{x} {y}")?;
        }

        Ok(path)
    }

    fn run_gnuplot(&self, script: &str) -> Result<(), SignalError> {
        let mut child = Command::new("gnuplot")
            .arg("-persistent")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| SignalError::PlotterSpawn(e.to_string()))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(script.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            warn!("gnuplot exited with {}", status);
        }

        Ok(())
    }
}

impl Renderer for GnuplotRenderer {
    fn render_time_domain(&self, points: &[(f64, f64)]) -> Result<(), SignalError> {
        let data = self.write_points("time_domain.txt", points)?;

        let script = format!(
            "set title 'Time Domain Signal'\n\
             set xlabel 'Time (s)'\n\
             set ylabel 'Amplitude'\n\
             plot '{}' with lines lw 2 title 'Signal'\n",
            data.display()
        );

        self.run_gnuplot(&script)
    }

    fn render_spectrum(
        &self,
        points: &[(f64, f64)],
        mode: FilterMode,
        cutoff_hz: f64,
    ) -> Result<(), SignalError> {
        let data = self.write_points("frequency_domain.txt", points)?;

        let script = format!(
            "set title '{} Filter - Frequency Domain Signal'\n\
             set xlabel 'Frequency (Hz)'\n\
             set ylabel 'Magnitude'\n\
             set xrange [0:{}]\n\
             set yrange [0:*]\n\
             set arrow from {cutoff},graph 0 to {cutoff},graph 1 nohead lc rgb 'red' lw 2\n\
             set label 'Cutoff Frequency' at {cutoff}, graph 0.9 textcolor rgb 'red'\n\
             plot '{}' with lines lw 2 title 'Magnitude'\n",
            mode.label(),
            self.sample_rate / 2.0,
            data.display(),
            cutoff = cutoff_hz,
        );

        self.run_gnuplot(&script)
    }
}
