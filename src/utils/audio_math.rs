//! Audio mathematics utilities.
//!
//! Sampling-theory helpers used by the generator: the Nyquist limit and the
//! anti-aliasing gate, plus time/sample-index conversions.
//!
//! # Examples
//!
//! ```rust
//! use sine_samples::audio_math::{apply_nyquist_gate, nyquist_limit};
//!
//! assert_eq!(nyquist_limit(44_100.0), 22_050.0);
//!
//! // Below the limit the signal passes through untouched
//! assert_eq!(apply_nyquist_gate(0.7, 440.0, 44_100.0), 0.7);
//! // At or above the limit it is silenced
//! assert_eq!(apply_nyquist_gate(0.7, 22_050.0, 44_100.0), 0.0);
//! ```

use std::time::Duration;

use crate::{SignalError, SignalResult};

// =============================================================================
// NYQUIST GATE
// =============================================================================

/// Half the sampling rate: the highest frequency a discrete signal can represent.
#[inline]
pub fn nyquist_limit(sampling_rate: f64) -> f64 {
    sampling_rate / 2.0
}

/// Returns true if `frequency` is at or above the Nyquist limit of `sampling_rate`.
///
/// The comparison is inclusive: a tone exactly at the limit counts as aliased.
#[inline]
pub fn exceeds_nyquist(frequency: f64, sampling_rate: f64) -> bool {
    frequency >= nyquist_limit(sampling_rate)
}

/// Anti-aliasing guard applied to every generated value.
///
/// This is a binary gate rather than a filter kernel. If `frequency` is at or above
/// the Nyquist limit the value is discarded and `0.0` is returned. Otherwise `signal`
/// is returned unchanged. Since frequency and sampling rate are fixed for a whole
/// generation call, either every sample of a signal is silenced or none is.
///
/// # Arguments
/// * `signal` - The continuous-time value to gate
/// * `frequency` - Frequency of the signal in Hz
/// * `sampling_rate` - Sampling rate in Hz
#[inline]
pub fn apply_nyquist_gate(signal: f64, frequency: f64, sampling_rate: f64) -> f64 {
    if exceeds_nyquist(frequency, sampling_rate) {
        return 0.0;
    }
    signal
}

// =============================================================================
// TIME CONVERSIONS
// =============================================================================

/// Converts a sample count to seconds.
///
/// ```rust
/// use sine_samples::audio_math::samples_to_seconds;
///
/// assert_eq!(samples_to_seconds(22_050, 44_100.0), 0.5);
/// ```
#[inline]
pub fn samples_to_seconds(samples: usize, sampling_rate: f64) -> f64 {
    samples as f64 / sampling_rate
}

/// Converts seconds to a sample count, rounding down.
///
/// ```rust
/// use sine_samples::audio_math::seconds_to_samples;
///
/// assert_eq!(seconds_to_samples(0.5, 44_100.0), 22_050);
/// ```
#[inline]
pub fn seconds_to_samples(seconds: f64, sampling_rate: f64) -> usize {
    (seconds * sampling_rate) as usize
}

/// Converts a floating-point second count into a [`Duration`].
///
/// # Errors
/// Returns [`SignalError::InvalidParameter`] for negative, `NaN` or infinite input,
/// or a value too large for `Duration`.
pub fn duration_from_secs(seconds: f64) -> SignalResult<Duration> {
    Duration::try_from_secs_f64(seconds).map_err(|e| {
        SignalError::invalid_parameter("duration", format!("{seconds} s is not a valid duration: {e}"))
    })
}
