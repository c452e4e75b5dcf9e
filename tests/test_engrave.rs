mod common;

use std::path::Path;

use brownian_noise::render::{self, batch, engrave, spectrum};

#[test]
fn test_write_pcm24_round_trip() {
    let config = common::test_config();
    let samples = render::render(&config).unwrap();
    let filename = common::test_audio_name(&config, "brownian_pcm24");
    engrave::write_pcm24(config.sample_rate, &samples, &filename).unwrap();

    let mut reader = hound::WavReader::open(&filename).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(spec.bits_per_sample, 24);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let read: Vec<i32> = reader.samples::<i32>().map(|s| s.unwrap()).collect();
    assert_eq!(read.len(), samples.len());
    for (pcm, x) in read.iter().zip(samples.iter()) {
        assert_eq!(*pcm, engrave::to_pcm24(*x));
    }
    let pcm_peak = read.iter().map(|s| s.abs()).max().unwrap();
    assert_eq!(pcm_peak, 7_549_747);
}

#[test]
fn test_plot_data_written_as_json() {
    let config = common::test_config();
    let samples = render::render(&config).unwrap();
    let data = spectrum::plot_data(&samples, config.sample_rate, 1000).unwrap();
    assert_eq!(data.num_samples, 48000);
    assert!(data.time.len() <= 1000);
    assert!(data.frequency.len() <= 1000);
    assert_eq!(data.time.len(), data.amplitude.len());
    assert_eq!(data.frequency.len(), data.intensity_db.len());

    let path = common::test_output_path("plot/brownian_plot.json");
    spectrum::write_plot_data(&path, &data).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let back: spectrum::PlotData = serde_json::from_str(&text).unwrap();
    assert_eq!(back.sample_rate, 48000);
    assert_eq!(back.frequency.len(), data.frequency.len());
}

#[test]
fn test_brownian_spectrum_falls_with_frequency() {
    let config = brownian_noise::NoiseConfig::new(48000, 4.0, 80.0).without_highpass().with_seed(3);
    let samples = render::render(&config).unwrap();
    let (freq, mag) = spectrum::magnitude_spectrum(&samples, config.sample_rate);

    let band_power = |lo: f64, hi: f64| {
        freq.iter()
            .zip(mag.iter())
            .filter(|(f, _)| **f >= lo && **f < hi)
            .map(|(_, m)| m * m)
            .sum::<f64>()
    };
    // roughly 20 dB per decade above the shaping cutoff
    let mid = band_power(800.0, 1000.0);
    let high = band_power(8000.0, 8200.0);
    assert!(mid > 30.0 * high, "mid {} high {}", mid, high);
}

#[test]
fn test_batch_writes_independent_files() {
    let config = brownian_noise::NoiseConfig::new(8000, 0.5, 80.0).with_highpass(20.0).with_seed(100);
    let base = common::test_output_path("batch/brownian_noise.wav");
    let written = batch::render_batch(&config, 3, Path::new(&base)).unwrap();

    assert_eq!(written.len(), 3);
    assert!(written[0].ends_with("brownian_noise_0.wav"));
    assert!(written[2].ends_with("brownian_noise_2.wav"));

    let read = |p: &Path| -> Vec<i32> {
        hound::WavReader::open(p).unwrap().samples::<i32>().map(|s| s.unwrap()).collect()
    };
    let first = read(&written[0]);
    let second = read(&written[1]);
    assert_eq!(first.len(), 4000);
    assert_ne!(first, second);

    let expected = render::render(&config.clone().with_seed(101)).unwrap();
    let expected: Vec<i32> = expected.iter().map(|&x| engrave::to_pcm24(x)).collect();
    assert_eq!(second, expected);
}
