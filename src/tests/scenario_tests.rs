//! Reference scenarios for the generate-and-write pipeline.

use super::*;
use crate::{SignalError, sine_wave};
use std::f64::consts::PI;
use std::io::{self, Write};

#[test]
fn test_scenario_440hz_one_second() {
    let wave = create_wave(440.0, Duration::from_secs(1), 1.0, 44_100.0, SampleFormat::Pcm16);
    let samples = wave.generate();

    assert_eq!(samples.len(), 44_100);
    assert_eq!(samples[0], 0.0);
    validate_amplitude_bound(&samples, 1.0);
}

#[test]
fn test_scenario_one_hz_at_ten_hz_sampling() {
    let samples = sine_wave(1.0, Duration::from_secs(1), 10.0, 1.0).unwrap();

    assert_eq!(samples.len(), 10);
    for (n, sample) in samples.iter().enumerate() {
        let expected = (2.0 * PI * n as f64 / 10.0).sin();
        assert!(
            (sample - expected).abs() < 1e-12,
            "sample {n}: got {sample}, expected {expected}"
        );
    }
}

#[test]
fn test_scenario_one_hz_pcm16_bytes() {
    let wave = create_wave(1.0, Duration::from_secs(1), 1.0, 10.0, SampleFormat::Pcm16);
    let expected: Vec<u8> = vec![
        0x00, 0x00, // 0
        0x3B, 0x4B, // 19259
        0xBB, 0x79, // 31163
        0xBB, 0x79, // 31163
        0x3B, 0x4B, // 19259
        0x00, 0x00, // 0
        0xC5, 0xB4, // -19259
        0x45, 0x86, // -31163
        0x45, 0x86, // -31163
        0xC5, 0xB4, // -19259
    ];
    assert_eq!(wave.to_bytes(), expected);
}

#[test]
fn test_scenario_pcm16_half_scale() {
    let encoded = SampleFormat::Pcm16.convert_sample(0.5);
    assert_eq!(encoded.as_bytes(), &[0xFF, 0x3F]);
}

#[test]
fn test_scenario_exactly_at_nyquist() {
    let wave = create_wave(22_050.0, Duration::from_secs(1), 1.0, 44_100.0, SampleFormat::Pcm16);
    let samples = wave.generate();

    assert_eq!(samples.len(), 44_100);
    assert!(samples.iter().all(|&x| x == 0.0));

    // silence still produces a full-length stream of zero bytes
    let bytes = wave.to_bytes();
    assert_eq!(bytes.len(), 88_200);
    assert!(bytes.iter().all(|&b| b == 0));
}

#[test]
fn test_write_to_matches_to_bytes() {
    for format in [SampleFormat::Pcm16, SampleFormat::Pcm32, SampleFormat::Float64] {
        let wave = create_wave(440.0, Duration::from_millis(100), 0.8, 44_100.0, format);
        let mut sink = Vec::new();
        let written = wave.write_to(&mut sink).unwrap();

        assert_eq!(written, sink.len() as u64);
        assert_eq!(written as usize, wave.encoded_len());
        assert_eq!(sink, wave.to_bytes());
    }
}

#[test]
fn test_float64_stream_decodes_to_generated_samples() {
    let wave = create_wave(1000.0, Duration::from_millis(20), 0.6, 48_000.0, SampleFormat::Float64);
    let decoded = SampleFormat::Float64.decode_stream(&wave.to_bytes()).unwrap();
    let generated = wave.generate();

    assert_eq!(decoded.len(), generated.len());
    for (a, b) in decoded.iter().zip(&generated) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_pcm_stream_decodes_within_quantization_error() {
    let wave = create_wave(250.0, Duration::from_millis(40), 0.9, 44_100.0, SampleFormat::Pcm16);
    let decoded = SampleFormat::Pcm16.decode_stream(&wave.to_bytes()).unwrap();
    for (a, b) in decoded.iter().zip(wave.generate()) {
        assert!((a - b).abs() <= 1.0 / 32_767.0);
    }
}

#[test]
fn test_amplitude_above_one_saturates_pcm() {
    // full-scale integer amplitude saturates almost every sample
    let wave = create_wave(440.0, Duration::from_millis(50), 32_767.0, 44_100.0, SampleFormat::Pcm16);
    let decoded = SampleFormat::Pcm16.decode_stream(&wave.to_bytes()).unwrap();
    assert!(decoded.iter().all(|x| x.abs() <= 1.0));
    assert!(decoded.iter().filter(|x| x.abs() == 1.0).count() > decoded.len() / 2);
}

/// Sink that fails once it has accepted `budget` bytes.
struct ClosingSink {
    written: usize,
    budget: usize,
}

impl Write for ClosingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_to_aborts_on_sink_failure() {
    let wave = create_wave(440.0, Duration::from_millis(10), 1.0, 44_100.0, SampleFormat::Pcm32);
    let mut sink = ClosingSink {
        written: 0,
        budget: 100,
    };

    match wave.write_to(&mut sink) {
        Err(SignalError::WriteFailure {
            bytes_written,
            source,
        }) => {
            assert_eq!(bytes_written, 100);
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected write failure, got {other:?}"),
    }
    assert_eq!(sink.written, 100);
}

#[test]
fn test_repeated_writes_are_identical() {
    let wave = create_wave(440.0, Duration::from_millis(100), 0.8, 44_100.0, SampleFormat::Pcm16);
    let outputs: Vec<Vec<u8>> = (0..3).map(|_| wave.to_bytes()).collect();
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}
