//! Cascaded second-order sections.
//!
//! Each section is normalized so its leading denominator coefficient is 1 and
//! runs in transposed direct form II, which needs two delay values.

use rustfft::num_complex::Complex;

use crate::synth::{pi2, SampleBuffer};

/// One biquad: `(b0 + b1 z^-1 + b2 z^-2) / (1 + a1 z^-1 + a2 z^-2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl Section {
    /// Coefficients as `[b0, b1, b2, a0, a1, a2]` with `a0 == 1`.
    pub fn coefficients(&self) -> [f64; 6] {
        [self.b0, self.b1, self.b2, 1.0, self.a1, self.a2]
    }

    #[inline]
    fn run(&self, delay: &mut SectionDelay, x: f64) -> f64 {
        let y = self.b0 * x + delay.s1;
        delay.s1 = self.b1 * x - self.a1 * y + delay.s2;
        delay.s2 = self.b2 * x - self.a2 * y;
        y
    }

    fn response(&self, z1: Complex<f64>) -> Complex<f64> {
        let z2 = z1 * z1;
        let num = Complex::new(self.b0, 0.0) + z1 * self.b1 + z2 * self.b2;
        let den = Complex::new(1.0, 0.0) + z1 * self.a1 + z2 * self.a2;
        num / den
    }
}

/// Two-sample memory of a single section.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionDelay {
    s1: f64,
    s2: f64,
}

/// An immutable filter design. State lives only for the length of one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SosFilter {
    sections: Vec<Section>,
    sample_rate: u32,
}

impl SosFilter {
    pub fn new(sections: Vec<Section>, sample_rate: u32) -> Self {
        SosFilter { sections, sample_rate }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Runs the whole buffer through the cascade in place, starting from
    /// zeroed delay lines. Length is unchanged.
    pub fn apply(&self, buffer: &mut [f64]) {
        let mut delays = vec![SectionDelay::default(); self.sections.len()];
        for sample in buffer.iter_mut() {
            let mut v = *sample;
            for (section, delay) in self.sections.iter().zip(delays.iter_mut()) {
                v = section.run(delay, v);
            }
            *sample = v;
        }
    }

    /// Consuming variant of [`SosFilter::apply`].
    pub fn filter(&self, mut buffer: SampleBuffer) -> SampleBuffer {
        self.apply(&mut buffer);
        buffer
    }

    /// |H(e^{jw})| of the cascade at `freq_hz`.
    pub fn magnitude_at(&self, freq_hz: f64) -> f64 {
        let w = pi2 * freq_hz / self.sample_rate as f64;
        let z1 = Complex::from_polar(1.0, -w);
        self.sections
            .iter()
            .fold(Complex::new(1.0, 0.0), |h, section| h * section.response(z1))
            .norm()
    }
}
