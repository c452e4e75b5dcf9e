use std::path::Path;

use log::info;

use crate::error::NoiseError;
use crate::files;
use crate::synth::{PCM24_BITS, PCM24_MAX, PCM24_MIN, PCM24_SCALE};

/// Full-scale float to a signed 24-bit integer, clipped at the rails.
#[inline]
pub fn to_pcm24(sample: f64) -> i32 {
  ((sample * PCM24_SCALE).round() as i64).clamp(PCM24_MIN as i64, PCM24_MAX as i64) as i32
}

/// Writes mono samples as a 24-bit integer PCM wav file.
pub fn write_pcm24<P: AsRef<Path>>(sample_rate: u32, samples: &[f64], filename: P) -> Result<(), NoiseError> {
  let p: &Path = filename.as_ref();
  files::with_parent_dir(p)?;
  let spec = hound::WavSpec {
    channels: 1,
    sample_rate,
    bits_per_sample: PCM24_BITS,
    sample_format: hound::SampleFormat::Int,
  };
  let mut writer = hound::WavWriter::create(p, spec)?;
  for &sample in samples {
    writer.write_sample(to_pcm24(sample))?;
  }
  writer.finalize()?;
  info!("Brownian noise WAV file '{}' has been generated and saved", p.display());
  Ok(())
}
