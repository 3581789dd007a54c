//! Sine signal generation.
//!
//! [`SineWave`] maps a sample index to a gated signal value and materialises the full
//! buffer for a [`SignalConfig`]. Generation is a pure function of `(index, config)`:
//! the same config always yields the same samples, bit for bit.
//!
//! ```rust
//! use sine_samples::{SignalConfig, SineWave};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), sine_samples::SignalError> {
//! let config = SignalConfig::builder(1.0, Duration::from_secs(1))
//!     .sampling_rate(10.0)
//!     .build()?;
//! let wave = SineWave::new(config)?;
//! let samples = wave.generate();
//! assert_eq!(samples.len(), 10);
//! assert_eq!(samples[0], 0.0);
//! # Ok(())
//! # }
//! ```

use std::f64::consts::PI;
use std::io::Write;
use std::time::Duration;

use tracing::{debug, warn};

use crate::iterators::SampleIter;
use crate::serialization::{encode_samples, write_samples};
use crate::utils::audio_math::{apply_nyquist_gate, exceeds_nyquist};
use crate::{SampleFormat, SignalConfig, SignalResult};

/// A sine generator bound to one validated [`SignalConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    config: SignalConfig,
}

impl SineWave {
    /// Wraps a config after re-checking it.
    ///
    /// Configs built through [`SignalConfig::builder`] are already valid; the check
    /// matters for configs that arrived through deserialization.
    ///
    /// # Errors
    /// Returns [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter)
    /// if any field is out of its domain.
    pub fn new(config: SignalConfig) -> SignalResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator was built from.
    pub const fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Output format of [`write_to`](Self::write_to).
    pub const fn format(&self) -> SampleFormat {
        self.config.format()
    }

    /// Number of samples [`generate`](Self::generate) returns.
    pub fn sample_count(&self) -> usize {
        self.config.sample_count()
    }

    /// Exact number of bytes [`write_to`](Self::write_to) produces on success.
    pub fn encoded_len(&self) -> usize {
        self.config.encoded_len()
    }

    /// Returns true if the configured frequency is at or above the Nyquist limit,
    /// in which case every generated sample is `0.0`.
    pub fn is_silenced(&self) -> bool {
        exceeds_nyquist(self.config.frequency(), self.config.sampling_rate())
    }

    /// Value of the continuous signal `amplitude * sin(2π f t)` at time `t` seconds.
    #[inline]
    pub fn continuous_signal_at(&self, t: f64) -> f64 {
        let angle = 2.0 * PI * self.config.frequency() * t;
        self.config.amplitude() * angle.sin()
    }

    /// Gated value of sample `n`, taken at `t = n / sampling_rate`.
    #[inline]
    pub fn sample_at(&self, n: usize) -> f64 {
        let t = self.config.sample_time(n);
        let signal = self.continuous_signal_at(t);
        apply_nyquist_gate(signal, self.config.frequency(), self.config.sampling_rate())
    }

    /// Generates every sample of the signal in index order.
    ///
    /// Returns an empty buffer for a zero-length duration.
    pub fn generate(&self) -> Vec<f64> {
        let count = self.sample_count();
        self.log_generation(count);

        let mut samples = Vec::with_capacity(count);
        samples.extend((0..count).map(|n| self.sample_at(n)));
        samples
    }

    /// Generates every sample on the rayon thread pool.
    ///
    /// The buffer is split into one contiguous chunk per CPU. Each index is still
    /// computed by [`sample_at`](Self::sample_at), so the result is element-for-element
    /// identical to [`generate`](Self::generate).
    #[cfg(feature = "parallel-processing")]
    pub fn generate_parallel(&self) -> Vec<f64> {
        use rayon::prelude::*;

        let count = self.sample_count();
        self.log_generation(count);

        let mut samples = vec![0.0; count];
        if count == 0 {
            return samples;
        }
        let chunk_len = count.div_ceil(num_cpus::get().max(1));
        samples
            .par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let offset = chunk_idx * chunk_len;
                for (i, slot) in chunk.iter_mut().enumerate() {
                    *slot = self.sample_at(offset + i);
                }
            });
        samples
    }

    /// Lazy, restartable iterator over the same values [`generate`](Self::generate) returns.
    pub fn samples(&self) -> SampleIter<'_> {
        SampleIter::new(self)
    }

    /// Generates the full buffer, then encodes and writes every sample to `sink` in order.
    ///
    /// Returns the number of bytes written, which on success equals
    /// [`encoded_len`](Self::encoded_len).
    ///
    /// # Errors
    /// Returns [`SignalError::WriteFailure`](crate::SignalError::WriteFailure) carrying the
    /// bytes already accepted if the sink rejects a write. Remaining samples are not written.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> SignalResult<u64> {
        let samples = self.generate();
        write_samples(&samples, self.format(), sink)
    }

    /// Generates and encodes the full signal into memory.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_samples(&self.generate(), self.format())
    }

    fn log_generation(&self, count: usize) {
        debug!(
            frequency = self.config.frequency(),
            sampling_rate = self.config.sampling_rate(),
            amplitude = self.config.amplitude(),
            samples = count,
            "generating sine samples"
        );
        if count > 0 && self.is_silenced() {
            warn!(
                frequency = self.config.frequency(),
                nyquist = self.config.nyquist_limit(),
                "frequency is at or above the Nyquist limit, output is silent"
            );
        }
    }
}

/// Generates a sine wave with the specified parameters.
///
/// Shorthand for building a [`SignalConfig`] and calling [`SineWave::generate`].
///
/// # Arguments
/// * `frequency` - Frequency of the sine wave in Hz
/// * `duration` - Duration of the signal
/// * `sampling_rate` - Sampling rate in Hz
/// * `amplitude` - Peak amplitude of the sine wave
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`](crate::SignalError::InvalidParameter) for
/// out-of-domain parameters.
pub fn sine_wave(
    frequency: f64,
    duration: Duration,
    sampling_rate: f64,
    amplitude: f64,
) -> SignalResult<Vec<f64>> {
    let config = SignalConfig::builder(frequency, duration)
        .sampling_rate(sampling_rate)
        .amplitude(amplitude)
        .build()?;
    Ok(SineWave::new(config)?.generate())
}
