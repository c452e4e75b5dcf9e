//! Brownian noise synthesis: a one-pole shaped Gaussian source, an optional
//! Butterworth high-pass against sub-audio drift, and peak normalization with
//! headroom, written out as 24-bit PCM.
pub mod error;
pub mod files;
pub mod filter;
pub mod inp;
pub mod noise;
pub mod render;
pub mod synth;
pub mod synth_config;

pub use error::NoiseError;
pub use synth::SampleBuffer;
pub use synth_config::NoiseConfig;
