//! Frequency-domain masking filters

pub mod mask;

pub use mask::{FilterMode, FrequencyMask};
