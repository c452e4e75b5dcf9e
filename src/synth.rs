//! Shared settings for the noise synthesis pipeline.
//!
//! Offers the sample buffer alias used by every stage and the fixed
//! constants of the output format, at f64 precision.
#![allow(non_upper_case_globals)]

pub const pi: f64 = std::f64::consts::PI;
pub const pi2: f64 = pi * 2f64;

/// Discrete-time signal at a fixed sample rate. Every stage preserves its length.
pub type SampleBuffer = Vec<f64>;

/// Scale applied after peak normalization to keep clear of full scale.
pub const HEADROOM: f64 = 0.9;

/// Order of the sub-audio high-pass stage.
pub const HIGHPASS_ORDER: usize = 10;

pub const DEFAULT_SR: u32 = 44100;
pub const DEFAULT_DURATION_SECONDS: f64 = 100.0;
pub const DEFAULT_F3DB_HZ: f64 = 80.0;
pub const DEFAULT_HIGHPASS_HZ: f64 = 20.0;

// 24-bit PCM full scale
pub const PCM24_BITS: u16 = 24;
pub const PCM24_SCALE: f64 = 8_388_608.0;
pub const PCM24_MAX: i32 = 8_388_607;
pub const PCM24_MIN: i32 = -8_388_608;

/// Nyquist frequency for a sample rate.
#[inline]
pub fn nyquist(sample_rate: u32) -> f64 {
    sample_rate as f64 / 2f64
}
