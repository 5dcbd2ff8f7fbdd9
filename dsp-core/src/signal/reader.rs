//! Sample data source
//!
//! Parses whitespace-separated `time amplitude` records. Reading stops at
//! the first malformed or missing record; records read before it are kept
//! as-is (truncate policy, no zero-fill of the remainder).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::SignalError;
use crate::signal::SampleBuffer;

/// Read up to `capacity` records from `source`
///
/// # Errors
/// Only I/O failures are errors; a short or empty record stream yields a
/// correspondingly short buffer.
pub fn read_samples<R: Read>(mut source: R, capacity: usize) -> Result<SampleBuffer, SignalError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;

    let mut fields = text.split_whitespace();
    let mut time = Vec::with_capacity(capacity);
    let mut amplitude = Vec::with_capacity(capacity);

    while time.len() < capacity {
        let (Some(t), Some(a)) = (fields.next(), fields.next()) else {
            break;
        };
        let (Ok(t), Ok(a)) = (t.parse::<f64>(), a.parse::<f64>()) else {
            break;
        };

        time.push(t);
        amplitude.push(a);
    }

    debug!("read {} of up to {} samples", time.len(), capacity);

    SampleBuffer::new(time, amplitude)
}

/// Read up to `capacity` records from a file
pub fn read_samples_from_file<P: AsRef<Path>>(
    path: P,
    capacity: usize,
) -> Result<SampleBuffer, SignalError> {
    let file = File::open(path)?;
    read_samples(file, capacity)
}
