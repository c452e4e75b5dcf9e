pub mod batch;
pub mod engrave;
pub mod spectrum;

use log::{debug, info};

use crate::error::NoiseError;
use crate::filter::{self, SosFilter};
use crate::noise::{self, WhiteNoise};
use crate::synth::{SampleBuffer, HEADROOM};
use crate::synth_config::NoiseConfig;

/// Scales a buffer so its peak magnitude is exactly [`HEADROOM`].
///
/// Every sample becomes `x * HEADROOM / max|x|`, so the output lies in
/// `[-HEADROOM, HEADROOM]`. An all-zero or empty buffer has no peak to scale
/// against and is rejected with `DegenerateSignal`.
pub fn normalize(mut buffer: SampleBuffer) -> Result<SampleBuffer, NoiseError> {
  let max_amplitude = buffer.iter().map(|&sample| sample.abs()).fold(0.0, f64::max);
  if max_amplitude == 0.0 {
    return Err(NoiseError::DegenerateSignal);
  }

  let scale = HEADROOM / max_amplitude;
  buffer.iter_mut().for_each(|sample| *sample *= scale);
  info!("Brownian noise normalized to range [-{}, {}]", HEADROOM, HEADROOM);
  Ok(buffer)
}

/// Parameters derived from a config before any buffer exists.
#[derive(Debug, Clone)]
pub struct Plan {
  pub alpha: f64,
  pub num_samples: usize,
  pub highpass: Option<SosFilter>,
}

/// Validates the config and designs every filter, so parameter errors surface
/// before the sample buffer is allocated.
pub fn plan(config: &NoiseConfig) -> Result<Plan, NoiseError> {
  config.validate()?;
  info!("Calculating alpha for cutoff frequency {} Hz", config.f3db_hz);
  let alpha = noise::find_alpha(config.sample_rate, config.f3db_hz)?;
  info!("Calculated alpha: {}", alpha);

  let highpass = if config.highpass_enabled {
    let design = filter::highpass(config.highpass_order, config.highpass_hz, config.sample_rate)?;
    debug!("designed order {} high-pass at {} Hz", config.highpass_order, config.highpass_hz);
    Some(design)
  } else {
    None
  };

  Ok(Plan {
    alpha,
    num_samples: config.num_samples(),
    highpass,
  })
}

/// Runs the full pipeline with a source built from the config's seed.
pub fn render(config: &NoiseConfig) -> Result<SampleBuffer, NoiseError> {
  let mut source = WhiteNoise::from_config_seed(config.seed);
  render_with_source(config, &mut source)
}

/// coefficient -> generate -> optional high-pass -> normalize
pub fn render_with_source(config: &NoiseConfig, source: &mut WhiteNoise) -> Result<SampleBuffer, NoiseError> {
  let plan = plan(config)?;
  let mut buffer = noise::brownian(plan.num_samples, plan.alpha, source)?;

  if let Some(highpass) = &plan.highpass {
    info!("Applying high pass filter at {} Hz", config.highpass_hz);
    highpass.apply(&mut buffer);
  }

  normalize(buffer)
}
