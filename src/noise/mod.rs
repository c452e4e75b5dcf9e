//! Colored noise from a seeded Gaussian excitation.
pub mod alpha;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::NoiseError;
use crate::synth::{pi2, SampleBuffer};

pub use alpha::find_alpha;

/// Standard normal source (mean 0, variance 1) over an explicitly seeded RNG.
///
/// Uses the Box-Muller transform; each pair of uniforms yields two
/// independent draws, the second of which is held for the next call.
pub struct WhiteNoise {
    rng: StdRng,
    spare: Option<f64>,
}

impl WhiteNoise {
    pub fn from_seed(seed: u64) -> Self {
        WhiteNoise {
            rng: StdRng::seed_from_u64(seed),
            spare: None,
        }
    }

    pub fn from_entropy() -> Self {
        WhiteNoise {
            rng: StdRng::from_entropy(),
            spare: None,
        }
    }

    pub fn from_config_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => WhiteNoise::from_seed(seed),
            None => WhiteNoise::from_entropy(),
        }
    }

    pub fn next_gaussian(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        // u1 in (0, 1] keeps ln finite
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen::<f64>();
        let r = (-2.0 * u1.ln()).sqrt();
        let (sin, cos) = (pi2 * u2).sin_cos();
        self.spare = Some(r * sin);
        r * cos
    }
}

/// One-pole recursive low-pass, `y[n] = a x[n] + (1 - a) y[n-1]`.
#[derive(Debug, Clone, Copy)]
pub struct OnePole {
    alpha: f64,
    prev: f64,
}

impl OnePole {
    pub fn new(alpha: f64) -> Self {
        OnePole { alpha, prev: 0.0 }
    }

    #[inline]
    pub fn run(&mut self, x: f64) -> f64 {
        self.prev = self.alpha * x + (1.0 - self.alpha) * self.prev;
        self.prev
    }
}

/// Reserves an exact-length buffer, reporting failure instead of aborting.
pub fn allocate(samples: usize) -> Result<SampleBuffer, NoiseError> {
    let mut buffer: SampleBuffer = Vec::new();
    buffer
        .try_reserve_exact(samples)
        .map_err(|_| NoiseError::AllocationFailure { samples })?;
    Ok(buffer)
}

/// Brownian (red) noise: `n` Gaussian draws through a leaky integrator.
///
/// The integrator forgets with factor `1 - alpha`, so the spectrum falls off
/// at roughly 6 dB/octave above the cutoff that produced `alpha`.
pub fn brownian(n: usize, alpha: f64, source: &mut WhiteNoise) -> Result<SampleBuffer, NoiseError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(NoiseError::invalid(format!("alpha {} outside (0, 1)", alpha)));
    }
    info!("Generating {} samples of Brownian noise", n);
    let mut buffer = allocate(n)?;
    let mut filter = OnePole::new(alpha);
    buffer.extend((0..n).map(|_| filter.run(source.next_gaussian())));
    Ok(buffer)
}
