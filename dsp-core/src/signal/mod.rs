//! Time-domain sample handling

pub mod buffer;
pub mod reader;

pub use buffer::SampleBuffer;
pub use reader::{read_samples, read_samples_from_file};
