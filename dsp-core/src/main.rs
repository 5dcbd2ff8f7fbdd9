//! Interactive filter workbench over a file-based sample batch
//!
//! Reads one batch of `time amplitude` records, then loops: pick a filter,
//! run transform → mask → analyze, and plot both domains with gnuplot.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use spectral_filter::render::{GnuplotRenderer, Renderer};
use spectral_filter::signal::read_samples_from_file;
use spectral_filter::{FilterConfig, FilterMode, FilterPipeline, SignalError};

/// Direct-DFT low-pass/high-pass filter workbench
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file of whitespace-separated `time amplitude` records
    #[arg(default_value = "Readings.txt")]
    data_file: PathBuf,

    /// Maximum number of samples to read
    #[arg(long, default_value_t = 128)]
    samples: usize,

    /// Sampling rate in Hz
    #[arg(long, default_value_t = 1000.0)]
    sample_rate: f64,

    /// Low-pass cutoff frequency in Hz
    #[arg(long, default_value_t = 50.0)]
    low_pass: f64,

    /// High-pass cutoff frequency in Hz
    #[arg(long, default_value_t = 200.0)]
    high_pass: f64,

    /// Directory for plot data files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip the gnuplot rendering step
    #[arg(long)]
    no_plot: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = FilterConfig {
        sample_capacity: args.samples,
        sample_rate: args.sample_rate,
        low_pass_cutoff: args.low_pass,
        high_pass_cutoff: args.high_pass,
    };

    let samples = read_samples_from_file(&args.data_file, config.sample_capacity)
        .with_context(|| format!("reading {}", args.data_file.display()))?;
    if samples.is_empty() {
        return Err(SignalError::NoSamples.into());
    }
    info!(
        "loaded {} samples from {}",
        samples.len(),
        args.data_file.display()
    );

    let pipeline = FilterPipeline::new(config);
    let renderer = GnuplotRenderer::new(&args.output_dir, config.sample_rate);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mode = loop {
            println!("Select filter type:");
            println!("1: Low-Pass Filter");
            println!("2: High-Pass Filter");
            print!("Enter your choice: ");
            io::stdout().flush()?;

            match lines.next().transpose()? {
                Some(line) => match line.trim() {
                    "1" => break FilterMode::LowPass,
                    "2" => break FilterMode::HighPass,
                    _ => println!("Invalid choice. Please enter 1 or 2."),
                },
                // stdin closed
                None => return Ok(()),
            }
        };

        let output = pipeline.run(&samples, mode);

        let peak = output
            .spectrum_points
            .iter()
            .copied()
            .fold((0.0, 0.0), |best, p| if p.1 > best.1 { p } else { best });
        println!(
            "{} filter at {} Hz; peak magnitude {:.3} at {:.1} Hz",
            mode.label(),
            output.cutoff_hz,
            peak.1,
            peak.0
        );

        if !args.no_plot {
            let time_points: Vec<(f64, f64)> = samples.pairs().collect();
            renderer.render_time_domain(&time_points)?;
            renderer.render_spectrum(&output.spectrum_points, mode, output.cutoff_hz)?;
        }

        print!("Do you want to apply another filter? (y/n): ");
        io::stdout().flush()?;
        match lines.next().transpose()? {
            Some(line) if line.trim().eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    println!("Exiting the program. Goodbye!");
    Ok(())
}
