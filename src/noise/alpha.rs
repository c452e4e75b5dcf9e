//! Closed-form coefficient for a one-pole smoothing filter.
//!
//! Solving |H(e^{jw})|^2 = 1/2 for `y[n] = a x[n] + (1 - a) y[n-1]` at
//! `w = 2 pi f3dB / Fs` gives
//!
//! ```text
//! a = sqrt(cos(w)^2 - 4 cos(w) + 3) + cos(w) - 1
//! ```
//!
//! Evaluated through `m = 1 - cos(w) = 2 sin(w/2)^2` as `sqrt(m (m + 2)) - m`,
//! which keeps precision when `w` is tiny.

use crate::error::NoiseError;
use crate::synth::{nyquist, pi2};

/// Coefficient of the one-pole low-pass whose -3 dB point lands on `f3db_hz`.
///
/// # Parameters
/// - `sample_rate`: Sample rate in Hz.
/// - `f3db_hz`: Target cutoff, strictly between 0 and Nyquist.
///
/// # Returns
/// - `Result<f64, NoiseError>`: alpha in (0, 1), or `InvalidParameter` when the
///   cutoff is out of range or the expression leaves the reals.
pub fn find_alpha(sample_rate: u32, f3db_hz: f64) -> Result<f64, NoiseError> {
    if sample_rate == 0 {
        return Err(NoiseError::invalid("sample rate must be positive"));
    }
    let nyq = nyquist(sample_rate);
    if !f3db_hz.is_finite() || f3db_hz <= 0.0 || f3db_hz >= nyq {
        return Err(NoiseError::invalid(format!(
            "f3dB cutoff {} Hz must lie strictly between 0 and Nyquist ({} Hz)",
            f3db_hz, nyq
        )));
    }

    let half_theta = pi2 * f3db_hz / sample_rate as f64 / 2.0;
    let m = 2.0 * half_theta.sin().powi(2);
    let radicand = m * (m + 2.0);
    if radicand < 0.0 {
        return Err(NoiseError::invalid(format!(
            "alpha radicand is negative ({}) for f3dB {} Hz at {} Hz",
            radicand, f3db_hz, sample_rate
        )));
    }

    let alpha = radicand.sqrt() - m;
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(NoiseError::invalid(format!(
            "alpha {} outside (0, 1) for f3dB {} Hz at {} Hz",
            alpha, f3db_hz, sample_rate
        )));
    }
    Ok(alpha)
}
