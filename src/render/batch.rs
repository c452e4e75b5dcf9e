//! Many independent renders at once. Each run gets its own seed, source,
//! buffer and filter state; nothing is shared between workers.
use std::env;
use std::path::{Path, PathBuf};
use std::thread;

use log::{debug, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use sysinfo::System;

use crate::error::NoiseError;
use crate::files;
use crate::render::{self, engrave};
use crate::synth_config::NoiseConfig;

/// Workers for `jobs` renders: available parallelism limited by idle cores,
/// `MAX_PAR_THREADS` and the job count, leaving one core free.
pub fn par_thread_count(jobs: usize) -> usize {
  let available = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);

  let mut sys = System::new_all();
  sys.refresh_cpu_all();
  let idle_cores = sys.cpus().iter().filter(|cpu| cpu.cpu_usage() < 50.0).count().max(1);

  let cap = env::var("MAX_PAR_THREADS")
    .ok()
    .and_then(|val| val.parse::<usize>().ok())
    .unwrap_or(usize::MAX);

  let usable = available.min(idle_cores).min(cap).saturating_sub(1).max(1);
  let num_threads = usable.min(jobs.max(1));
  debug!(
    "{} threads available, {} idle cores, using {} for {} jobs",
    available, idle_cores, num_threads, jobs
  );
  num_threads
}

/// Seeds `base, base + 1, ...` with wraparound.
pub fn batch_seeds(base: u64, count: usize) -> Vec<u64> {
  (0..count as u64).map(|i| base.wrapping_add(i)).collect()
}

/// Renders `count` files next to `out_path`, named `<stem>_<index>.<ext>`.
///
/// # Returns
/// - The written paths in index order, or the first error any run hit.
pub fn render_batch(config: &NoiseConfig, count: usize, out_path: &Path) -> Result<Vec<PathBuf>, NoiseError> {
  if count == 0 {
    return Err(NoiseError::invalid("batch count must be at least 1"));
  }
  // fail before spawning anything
  render::plan(config)?;

  let base = config.seed.unwrap_or_else(rand::random::<u64>);
  let jobs: Vec<(PathBuf, NoiseConfig)> = batch_seeds(base, count)
    .into_iter()
    .enumerate()
    .map(|(i, seed)| (files::indexed_name(out_path, i, count), config.clone().with_seed(seed)))
    .collect();

  let num_threads = par_thread_count(count);
  info!("Rendering {} files on {} threads, base seed {}", count, num_threads, base);
  let pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;

  pool.install(|| {
    jobs
      .par_iter()
      .map(|(path, job)| -> Result<PathBuf, NoiseError> {
        debug!("rendering {} with seed {:?}", path.display(), job.seed);
        let samples = render::render(job)?;
        engrave::write_pcm24(job.sample_rate, &samples, path)?;
        Ok(path.clone())
      })
      .collect()
  })
}
