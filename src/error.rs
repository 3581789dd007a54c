//! Error types and result utilities for signal generation and sample encoding.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`SignalError`].
pub type SignalResult<T> = Result<T, SignalError>;

/// Error types that can occur while configuring, generating or writing a signal.
///
/// The quantize/encode path never produces an error: every `f64` maps to some
/// well-defined byte sequence. Errors only come from bad configuration, from the
/// output sink, or from decoding a byte stream that is not a whole number of samples.
#[derive(Error, Debug)]
pub enum SignalError {
    /// A configuration value is non-finite or outside its domain.
    ///
    /// This covers non-positive frequency or sampling rate, negative amplitude or
    /// duration, and any `NaN`/`Inf` input.
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human readable reason.
        reason: String,
    },

    /// The output sink rejected a write.
    ///
    /// `bytes_written` is the number of bytes accepted by the sink before the failure.
    /// Nothing is retried or rolled back.
    #[error("Unable to write sample data after {bytes_written} bytes: {source}")]
    WriteFailure {
        /// Bytes successfully written before the failing write.
        bytes_written: u64,
        /// The underlying sink error.
        #[source]
        source: std::io::Error,
    },

    /// A byte slice handed to a decoder does not hold a whole number of samples.
    #[error("Malformed sample stream: expected a multiple of {expected} bytes, got {actual}")]
    MalformedStream {
        /// Bytes per sample for the format being decoded.
        expected: usize,
        /// Length of the slice that was provided.
        actual: usize,
    },
}

impl SignalError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Create a write failure error carrying the partial byte count.
    pub const fn write_failure(bytes_written: u64, source: std::io::Error) -> Self {
        Self::WriteFailure {
            bytes_written,
            source,
        }
    }

    /// Bytes accepted by the sink before a write failure, if this is one.
    pub const fn bytes_written(&self) -> Option<u64> {
        match self {
            Self::WriteFailure { bytes_written, .. } => Some(*bytes_written),
            _ => None,
        }
    }

    /// Returns true if this error was caused by an invalid configuration value.
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
