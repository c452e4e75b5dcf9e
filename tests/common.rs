#![allow(dead_code)]
const TEST_AUDIO_DIR: &str = "test-render";
use brownian_noise::synth_config::NoiseConfig;

pub fn test_audio_name(config: &NoiseConfig, label: &str) -> String {
    let name: String = format!("{}_sample-rate_{}_channels_{}", label, config.sample_rate, 1);
    format!("{}/{}.wav", TEST_AUDIO_DIR, name)
}

pub fn test_output_path(label: &str) -> String {
    format!("{}/{}", TEST_AUDIO_DIR, label)
}

// One second at 48 kHz, shaped at 80 Hz, no high-pass, fixed seed
pub fn test_config() -> NoiseConfig {
    NoiseConfig::new(48000, 1.0, 80.0).without_highpass().with_seed(42)
}

pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |m, x| m.max(x.abs()))
}
