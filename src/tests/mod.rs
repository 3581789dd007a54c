//! Crate-level tests.
//!
//! This module covers the full generate-gate-encode-write pipeline: the reference
//! scenarios and the properties that must hold for every valid configuration.

use std::time::Duration;

use crate::{SampleFormat, SignalConfig, SineWave};

mod scenario_tests;

/// Helper function to build a generator, panicking on invalid parameters
pub(crate) fn create_wave(
    frequency: f64,
    duration: Duration,
    amplitude: f64,
    sampling_rate: f64,
    format: SampleFormat,
) -> SineWave {
    let config = SignalConfig::builder(frequency, duration)
        .amplitude(amplitude)
        .sampling_rate(sampling_rate)
        .format(format)
        .build()
        .expect("test parameters are valid");
    SineWave::new(config).expect("validated config")
}

/// Helper function to validate that a sample buffer stays within the amplitude bound
pub(crate) fn validate_amplitude_bound(samples: &[f64], amplitude: f64) {
    for (n, sample) in samples.iter().enumerate() {
        assert!(
            sample.abs() <= amplitude,
            "sample {n} = {sample} exceeds amplitude {amplitude}"
        );
    }
}

/// Configurations shared by the property tests: (frequency, duration, amplitude, sampling rate)
pub(crate) const VALID_CONFIGS: &[(f64, Duration, f64, f64)] = &[
    (440.0, Duration::from_secs(1), 1.0, 44_100.0),
    (440.0, Duration::from_millis(100), 0.8, 44_100.0),
    (1000.0, Duration::from_millis(500), 0.8, 48_000.0),
    (220.0, Duration::from_millis(100), 0.3, 44_100.0),
    (1.0, Duration::from_secs(1), 1.0, 100.0),
    (10.0, Duration::from_secs(1), 1.0, 44_100.0),
    (10_000.0, Duration::from_millis(50), 0.5, 44_100.0),
    (1e6, Duration::from_millis(10), 1.0, 1e7),
    (3.0, Duration::from_millis(1500), 2.5, 7.0),
    (440.0, Duration::ZERO, 1.0, 44_100.0),
    (440.0, Duration::from_secs(1), 0.0, 44_100.0),
    (30_000.0, Duration::from_millis(20), 1.0, 44_100.0),
];
