use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::NoiseError;
use crate::synth::{DEFAULT_DURATION_SECONDS, DEFAULT_F3DB_HZ, DEFAULT_HIGHPASS_HZ, DEFAULT_SR, HIGHPASS_ORDER};

/// Inputs to one render. The pipeline reads these and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub sample_rate: u32,
    pub duration_seconds: f64,
    /// -3 dB point of the one-pole shaping filter
    pub f3db_hz: f64,
    pub highpass_enabled: bool,
    pub highpass_hz: f64,
    pub highpass_order: usize,
    /// Fixed seed for reproducible output. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        NoiseConfig {
            sample_rate: DEFAULT_SR,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            f3db_hz: DEFAULT_F3DB_HZ,
            highpass_enabled: true,
            highpass_hz: DEFAULT_HIGHPASS_HZ,
            highpass_order: HIGHPASS_ORDER,
            seed: None,
        }
    }
}

impl NoiseConfig {
    pub fn new(sample_rate: u32, duration_seconds: f64, f3db_hz: f64) -> NoiseConfig {
        NoiseConfig {
            sample_rate,
            duration_seconds,
            f3db_hz,
            ..NoiseConfig::default()
        }
    }

    pub fn with_highpass(mut self, highpass_hz: f64) -> NoiseConfig {
        self.highpass_enabled = true;
        self.highpass_hz = highpass_hz;
        self
    }

    pub fn without_highpass(mut self) -> NoiseConfig {
        self.highpass_enabled = false;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> NoiseConfig {
        self.seed = Some(seed);
        self
    }

    /// Number of samples in the rendered buffer, `sample_rate * duration_seconds`.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds).round() as usize
    }

    /// Checks the fields that no single stage owns. Cutoffs are checked by
    /// the stage that consumes them.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.sample_rate == 0 {
            return Err(NoiseError::invalid("sample rate must be positive"));
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(NoiseError::invalid(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_seconds
            )));
        }
        if self.highpass_enabled && self.highpass_order == 0 {
            return Err(NoiseError::invalid("high-pass order must be at least 1"));
        }
        Ok(())
    }
}

/// Reads a JSON config document. Missing fields take their defaults.
pub fn load_config_from_file<P: AsRef<Path>>(filepath: P) -> Result<NoiseConfig, NoiseError> {
    let text = fs::read_to_string(filepath.as_ref())?;
    let config: NoiseConfig = serde_json::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let config = NoiseConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.duration_seconds, 100.0);
        assert_eq!(config.f3db_hz, 80.0);
        assert!(config.highpass_enabled);
        assert_eq!(config.highpass_hz, 20.0);
        assert_eq!(config.highpass_order, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_num_samples_is_rate_times_duration() {
        for (rate, secs) in [(44100u32, 1u32), (48000, 3), (96000, 2), (8000, 100)] {
            let config = NoiseConfig::new(rate, secs as f64, 80.0);
            assert_eq!(config.num_samples(), (rate * secs) as usize);
        }
    }

    #[test]
    fn test_validate_rejects_bad_rate_and_duration() {
        assert!(matches!(
            NoiseConfig::new(0, 1.0, 80.0).validate(),
            Err(NoiseError::InvalidParameter(_))
        ));
        assert!(matches!(
            NoiseConfig::new(48000, 0.0, 80.0).validate(),
            Err(NoiseError::InvalidParameter(_))
        ));
        assert!(matches!(
            NoiseConfig::new(48000, f64::NAN, 80.0).validate(),
            Err(NoiseError::InvalidParameter(_))
        ));
        assert!(NoiseConfig::new(48000, 1.0, 80.0).validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: NoiseConfig = serde_json::from_str(r#"{"sample_rate": 48000, "seed": 7}"#).unwrap();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.f3db_hz, 80.0);
        assert!(config.highpass_enabled);
    }
}
