//! Digital Butterworth high-pass design.
//!
//! Analog low-pass prototype poles sit on the unit circle at
//! `exp(j*pi*(2k + N + 1) / (2N))`. The cutoff is pre-warped, the prototype is
//! mapped to a high-pass (`s -> wc / s`, zeros at the origin), then the
//! bilinear transform carries poles into the z-plane and the origin zeros to
//! z = 1. Conjugate pairs become biquads; an odd order leaves one real pole.

use log::debug;
use rustfft::num_complex::Complex;

use crate::error::NoiseError;
use crate::filter::sos::{Section, SosFilter};
use crate::synth::{nyquist, pi};

/// Designs an `order`-pole Butterworth high-pass at `cutoff_hz`.
///
/// Produces `ceil(order / 2)` sections. The first-order section (odd orders)
/// comes first, then biquads from lowest to highest Q. Every section has unit
/// gain at Nyquist, so the cascade does too.
pub fn highpass(order: usize, cutoff_hz: f64, sample_rate: u32) -> Result<SosFilter, NoiseError> {
    if order == 0 {
        return Err(NoiseError::invalid("Butterworth order must be at least 1"));
    }
    if sample_rate == 0 {
        return Err(NoiseError::invalid("sample rate must be positive"));
    }
    let nyq = nyquist(sample_rate);
    if !cutoff_hz.is_finite() || cutoff_hz <= 0.0 || cutoff_hz >= nyq {
        return Err(NoiseError::invalid(format!(
            "high-pass cutoff {} Hz must lie strictly between 0 and Nyquist ({} Hz)",
            cutoff_hz, nyq
        )));
    }

    let fs = sample_rate as f64;
    let fs2 = 2.0 * fs;
    let wc = fs2 * (pi * cutoff_hz / fs).tan();

    let mut sections = Vec::with_capacity(order.div_ceil(2));
    if order % 2 == 1 {
        sections.push(first_order_section(fs2, wc));
    }
    for k in (0..order / 2).rev() {
        let pole = Complex::from_polar(1.0, pi * (2 * k + order + 1) as f64 / (2 * order) as f64);
        sections.push(pole_pair_section(fs2, wc, pole));
    }

    for (i, section) in sections.iter().enumerate() {
        debug!("highpass section {}: {:?}", i, section.coefficients());
    }
    Ok(SosFilter::new(sections, sample_rate))
}

/// Biquad for the conjugate pair of the upper-half-plane prototype pole `pole`.
fn pole_pair_section(fs2: f64, wc: f64, pole: Complex<f64>) -> Section {
    let hp_pole = Complex::new(wc, 0.0) / pole;
    let zp = (hp_pole + fs2) / (Complex::new(fs2, 0.0) - hp_pole);

    let a1 = -2.0 * zp.re;
    let a2 = zp.norm_sqr();
    // unit gain at z = -1
    let g = (1.0 - a1 + a2) / 4.0;
    Section { b0: g, b1: -2.0 * g, b2: g, a1, a2 }
}

/// Section for the real prototype pole at s = -1.
fn first_order_section(fs2: f64, wc: f64) -> Section {
    let zp = (fs2 - wc) / (fs2 + wc);
    let a1 = -zp;
    let g = (1.0 - a1) / 2.0;
    Section { b0: g, b1: -g, b2: 0.0, a1, a2: 0.0 }
}
