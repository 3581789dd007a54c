//! Signal configuration.
//!
//! A [`SignalConfig`] is built once and never mutated. The builder applies the
//! documented defaults and validates every field, so a config obtained from
//! [`SignalConfig::builder`] or [`SignalConfig::new`] is always usable.
//!
//! ```rust
//! use sine_samples::{SampleFormat, SignalConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), sine_samples::SignalError> {
//! let config = SignalConfig::builder(440.0, Duration::from_secs(2))
//!     .amplitude(0.8)
//!     .sampling_rate(48_000.0)
//!     .format(SampleFormat::Pcm32)
//!     .build()?;
//! assert_eq!(config.sample_count(), 96_000);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{MAX_SAMPLE_BYTES, SampleFormat, SignalError, SignalResult};

/// Amplitude used when none is given.
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
/// Sampling rate in Hz used when none is given.
pub const DEFAULT_SAMPLING_RATE: f64 = 44_100.0;

/// Largest sample count a config may describe.
///
/// Keeps both the `f64` buffer and the encoded stream within the allocation limit of
/// `isize::MAX` bytes.
pub const MAX_SAMPLE_COUNT: usize = isize::MAX as usize / MAX_SAMPLE_BYTES;

const fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

const fn default_sampling_rate() -> f64 {
    DEFAULT_SAMPLING_RATE
}

/// Immutable description of a sine signal and its output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    frequency: f64,
    duration: Duration,
    #[serde(default = "default_amplitude")]
    amplitude: f64,
    #[serde(default = "default_sampling_rate")]
    sampling_rate: f64,
    #[serde(default)]
    format: SampleFormat,
}

impl SignalConfig {
    /// Creates a validated config with default amplitude, sampling rate and format.
    ///
    /// # Errors
    /// Returns [`SignalError::InvalidParameter`] if `frequency` is not finite and positive
    /// or the resulting sample count does not fit in memory addressing.
    pub fn new(frequency: f64, duration: Duration) -> SignalResult<Self> {
        Self::builder(frequency, duration).build()
    }

    /// Starts a builder with the two required parameters.
    pub const fn builder(frequency: f64, duration: Duration) -> SignalConfigBuilder {
        SignalConfigBuilder {
            frequency,
            duration,
            amplitude: DEFAULT_AMPLITUDE,
            sampling_rate: DEFAULT_SAMPLING_RATE,
            format: SampleFormat::Pcm16,
        }
    }

    /// Signal frequency in Hz.
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Signal duration.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Peak amplitude.
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Sampling rate in Hz.
    pub const fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// Output sample format.
    pub const fn format(&self) -> SampleFormat {
        self.format
    }

    /// Number of samples: `floor(sampling_rate * duration_seconds)`.
    pub fn sample_count(&self) -> usize {
        (self.sampling_rate * self.duration.as_secs_f64()) as usize
    }

    /// Time offset of sample `n` in seconds.
    #[inline]
    pub fn sample_time(&self, n: usize) -> f64 {
        n as f64 / self.sampling_rate
    }

    /// Half the sampling rate.
    pub fn nyquist_limit(&self) -> f64 {
        crate::utils::audio_math::nyquist_limit(self.sampling_rate)
    }

    /// Exact number of bytes a full write produces.
    pub fn encoded_len(&self) -> usize {
        self.sample_count()
            .saturating_mul(self.format.bytes_per_sample())
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    /// Returns [`SignalError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> SignalResult<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SignalError::invalid_parameter(
                "frequency",
                format!("must be finite and > 0, got {}", self.frequency),
            ));
        }
        if !self.sampling_rate.is_finite() || self.sampling_rate <= 0.0 {
            return Err(SignalError::invalid_parameter(
                "sampling_rate",
                format!("must be finite and > 0, got {}", self.sampling_rate),
            ));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(SignalError::invalid_parameter(
                "amplitude",
                format!("must be finite and >= 0, got {}", self.amplitude),
            ));
        }
        let samples = self.sampling_rate * self.duration.as_secs_f64();
        if !samples.is_finite() || samples >= MAX_SAMPLE_COUNT as f64 {
            return Err(SignalError::invalid_parameter(
                "duration",
                format!(
                    "{:?} at {} Hz yields an unaddressable sample count",
                    self.duration, self.sampling_rate
                ),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SignalConfig`].
#[derive(Debug, Clone, Copy)]
pub struct SignalConfigBuilder {
    frequency: f64,
    duration: Duration,
    amplitude: f64,
    sampling_rate: f64,
    format: SampleFormat,
}

impl SignalConfigBuilder {
    /// Peak amplitude (default `1.0`).
    pub const fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sampling rate in Hz (default `44100.0`).
    pub const fn sampling_rate(mut self, sampling_rate: f64) -> Self {
        self.sampling_rate = sampling_rate;
        self
    }

    /// Output format (default [`SampleFormat::Pcm16`]).
    pub const fn format(mut self, format: SampleFormat) -> Self {
        self.format = format;
        self
    }

    /// Validates and freezes the configuration.
    ///
    /// # Errors
    /// Returns [`SignalError::InvalidParameter`] if any field is out of its domain.
    pub fn build(self) -> SignalResult<SignalConfig> {
        let config = SignalConfig {
            frequency: self.frequency,
            duration: self.duration,
            amplitude: self.amplitude,
            sampling_rate: self.sampling_rate,
            format: self.format,
        };
        config.validate()?;
        Ok(config)
    }
}
