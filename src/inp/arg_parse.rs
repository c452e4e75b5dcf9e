use std::path::PathBuf;

use clap::Parser;

use crate::error::NoiseError;
use crate::synth_config::{self, NoiseConfig};

/// Command line for one render or a batch of them.
///
/// Values resolve in order: built-in defaults, `--config` JSON file,
/// `BROWNIAN_*` environment (a `.env` file counts), then flags.
#[derive(Parser, Debug, Clone)]
#[command(name = "brownian-noise", version, about = "Generate and process Brownian noise.")]
pub struct Args {
    /// JSON file with any subset of the noise settings.
    #[arg(long, short = 'c', env = "BROWNIAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Length of the noise in seconds.
    #[arg(long, short = 'l', env = "BROWNIAN_LENGTH")]
    pub length: Option<f64>,

    /// Sample rate in Hz. [44100, 48000, 96000, etc]
    #[arg(long = "sample_rate", short = 's', visible_alias = "sample-rate", env = "BROWNIAN_SAMPLE_RATE")]
    pub sample_rate: Option<u32>,

    /// Output file name.
    #[arg(long = "file_name", short = 'f', visible_alias = "file-name", default_value = "brownian_noise.wav")]
    pub file_name: PathBuf,

    /// Save waveform and spectrum data for plotting.
    #[arg(long, short = 'p')]
    pub plot: bool,

    /// File name for the plot data if plotting is enabled.
    #[arg(long = "plot_file_name", visible_alias = "plot-file-name", default_value = "plot.json")]
    pub plot_file_name: PathBuf,

    /// Maximum points kept per plotted series.
    #[arg(long = "plot_points", visible_alias = "plot-points", default_value_t = 8192)]
    pub plot_points: usize,

    /// f3dB cutoff frequency of the noise shaping in Hz.
    #[arg(long = "f3dB", visible_alias = "f3db", env = "BROWNIAN_F3DB")]
    pub f3db: Option<f64>,

    /// High pass filter cutoff frequency in Hz.
    #[arg(long, env = "BROWNIAN_HIGHPASS")]
    pub highpass: Option<f64>,

    /// Disable high pass filtering.
    #[arg(long = "no-highpass", visible_alias = "no_highpass")]
    pub no_highpass: bool,

    /// Butterworth order of the high pass filter.
    #[arg(long, env = "BROWNIAN_HIGHPASS_ORDER")]
    pub order: Option<usize>,

    /// Seed for reproducible output.
    #[arg(long, env = "BROWNIAN_SEED")]
    pub seed: Option<u64>,

    /// Number of files to render; more than one writes `<name>_<index>.wav`.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
}

/// Builds the render config from the file named by `--config` (or defaults)
/// with every given flag applied on top.
pub fn resolve(args: &Args) -> Result<NoiseConfig, NoiseError> {
    let mut config = match &args.config {
        Some(path) => synth_config::load_config_from_file(path)?,
        None => NoiseConfig::default(),
    };

    if let Some(length) = args.length {
        config.duration_seconds = length;
    }
    if let Some(sample_rate) = args.sample_rate {
        config.sample_rate = sample_rate;
    }
    if let Some(f3db) = args.f3db {
        config.f3db_hz = f3db;
    }
    if let Some(hz) = args.highpass {
        config.highpass_hz = hz;
    }
    if let Some(order) = args.order {
        config.highpass_order = order;
    }
    if args.no_highpass {
        config.highpass_enabled = false;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

#[cfg(test)]
mod test_unit {
    use super::*;
    use std::fs;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["brownian-noise"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&["-l", "5", "--sample_rate", "48000", "--f3dB", "120", "--highpass", "30", "--seed", "9"]);
        let config = resolve(&args).unwrap();
        assert_eq!(config.duration_seconds, 5.0);
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.f3db_hz, 120.0);
        assert_eq!(config.highpass_hz, 30.0);
        assert!(config.highpass_enabled);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_no_highpass_disables_filter() {
        let config = resolve(&parse(&["--no-highpass"])).unwrap();
        assert!(!config.highpass_enabled);
    }

    #[test]
    fn test_output_defaults() {
        let args = parse(&[]);
        assert_eq!(args.file_name, PathBuf::from("brownian_noise.wav"));
        assert_eq!(args.plot_file_name, PathBuf::from("plot.json"));
        assert!(!args.plot);
        assert_eq!(args.count, 1);
    }

    #[test]
    fn test_config_file_is_overridden_by_flags() {
        let path = "test-render/arg_parse/config.json";
        crate::files::with_parent_dir(std::path::Path::new(path)).unwrap();
        fs::write(path, r#"{"sample_rate": 96000, "duration_seconds": 2.0, "highpass_hz": 15.0}"#).unwrap();

        let config = resolve(&parse(&["--config", path, "-l", "3"])).unwrap();
        assert_eq!(config.sample_rate, 96000);
        assert_eq!(config.duration_seconds, 3.0);
        assert_eq!(config.highpass_hz, 15.0);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = resolve(&parse(&["--config", "test-render/arg_parse/does-not-exist.json"]));
        assert!(matches!(result, Err(NoiseError::Io(_))));
    }
}
