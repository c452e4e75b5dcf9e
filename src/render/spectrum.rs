//! Numeric half of the plotting collaborator: a time-domain waveform and a
//! magnitude spectrum, decimated and exported as JSON for an external renderer.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::files;

/// Floor added before taking the log so silent bins stay finite.
const DB_FLOOR: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
  pub sample_rate: u32,
  pub num_samples: usize,
  /// Seconds
  pub time: Vec<f64>,
  pub amplitude: Vec<f64>,
  /// Hz
  pub frequency: Vec<f64>,
  pub intensity_db: Vec<f64>,
}

/// `n` evenly spaced instants from 0 to `n / sample_rate` inclusive.
pub fn time_axis(n: usize, sample_rate: u32) -> Vec<f64> {
  let end = n as f64 / sample_rate as f64;
  match n {
    0 => vec![],
    1 => vec![0.0],
    _ => {
      let step = end / (n - 1) as f64;
      (0..n).map(|i| i as f64 * step).collect()
    }
  }
}

/// One-sided spectrum: `(k * Fs / N, |X[k]| / N)` for `k` in `0..=N/2`.
pub fn magnitude_spectrum(samples: &[f64], sample_rate: u32) -> (Vec<f64>, Vec<f64>) {
  let n = samples.len();
  if n == 0 {
    return (vec![], vec![]);
  }
  let mut planner = FftPlanner::<f64>::new();
  let fft = planner.plan_fft_forward(n);
  let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
  fft.process(&mut buffer);

  let bins = n / 2 + 1;
  let bin_hz = sample_rate as f64 / n as f64;
  let frequency = (0..bins).map(|k| k as f64 * bin_hz).collect();
  let magnitude = buffer[..bins].iter().map(|c| c.norm() / n as f64).collect();
  (frequency, magnitude)
}

#[inline]
pub fn to_db(magnitude: f64) -> f64 {
  20.0 * (magnitude + DB_FLOOR).log10()
}

/// Keeps every `stride`-th value so at most `max_points` remain.
pub fn decimate(values: &[f64], max_points: usize) -> Vec<f64> {
  let stride = values.len().div_ceil(max_points.max(1)).max(1);
  values.iter().step_by(stride).copied().collect()
}

pub fn plot_data(samples: &[f64], sample_rate: u32, max_points: usize) -> Result<PlotData, NoiseError> {
  if max_points == 0 {
    return Err(NoiseError::invalid("plot needs at least one point per series"));
  }
  let (frequency, magnitude) = magnitude_spectrum(samples, sample_rate);
  let intensity_db: Vec<f64> = magnitude.iter().map(|&m| to_db(m)).collect();

  Ok(PlotData {
    sample_rate,
    num_samples: samples.len(),
    time: decimate(&time_axis(samples.len(), sample_rate), max_points),
    amplitude: decimate(samples, max_points),
    frequency: decimate(&frequency, max_points),
    intensity_db: decimate(&intensity_db, max_points),
  })
}

pub fn write_plot_data<P: AsRef<Path>>(filename: P, data: &PlotData) -> Result<(), NoiseError> {
  let p = filename.as_ref();
  files::with_parent_dir(p)?;
  let writer = BufWriter::new(File::create(p)?);
  serde_json::to_writer(writer, data)?;
  info!("Plot data saved as {}", p.display());
  Ok(())
}
