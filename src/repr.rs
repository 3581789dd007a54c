//! Runtime representation of the supported output formats.
//!
//! [`SampleFormat`] is the closed set of encodings a [`SignalConfig`](crate::SignalConfig)
//! can select. It dispatches to the [`SampleEncoder`] implementations by `match`, so
//! no trait objects are involved on the per-sample path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::traits::{Float64, Pcm16, Pcm32, SampleEncoder};
use crate::{SignalError, SignalResult};

/// Largest encoded sample, in bytes (`Float64`).
pub const MAX_SAMPLE_BYTES: usize = 8;

/// Output sample format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    /// 16-bit signed PCM, little-endian.
    #[default]
    Pcm16,
    /// 32-bit signed PCM, little-endian.
    Pcm32,
    /// 64-bit IEEE-754 float, little-endian.
    Float64,
}

/// Canonical format names. [`SampleFormat::from_str`] also accepts the aliases
/// `s16le`, `s32le` and `f64le`.
pub const SUPPORTED_FORMATS: [&str; 3] = [Pcm16::LABEL, Pcm32::LABEL, Float64::LABEL];

impl SampleFormat {
    /// Bit depth of one encoded sample.
    pub const fn bit_depth(self) -> u32 {
        match self {
            Self::Pcm16 => Pcm16::BITS,
            Self::Pcm32 => Pcm32::BITS,
            Self::Float64 => Float64::BITS,
        }
    }

    /// Size in bytes of one encoded sample.
    pub const fn bytes_per_sample(self) -> usize {
        (self.bit_depth() / 8) as usize
    }

    /// Check if this is a floating point format
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float64)
    }

    /// Short lowercase name of the format.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pcm16 => Pcm16::LABEL,
            Self::Pcm32 => Pcm32::LABEL,
            Self::Float64 => Float64::LABEL,
        }
    }

    /// Quantizes and encodes a single sample.
    ///
    /// Never fails; the result is always exactly [`bytes_per_sample`](Self::bytes_per_sample) long.
    #[inline]
    pub fn convert_sample(self, sample: f64) -> EncodedSample {
        match self {
            Self::Pcm16 => EncodedSample::from_le(Pcm16.convert_sample(sample).as_ref()),
            Self::Pcm32 => EncodedSample::from_le(Pcm32.convert_sample(sample).as_ref()),
            Self::Float64 => EncodedSample::from_le(Float64.convert_sample(sample).as_ref()),
        }
    }

    /// Decodes exactly one encoded sample back to `f64`.
    ///
    /// PCM values are divided by their scale, so the result is only as precise as the
    /// format. `Float64` recovers the original bit pattern exactly.
    ///
    /// # Errors
    /// Returns [`SignalError::MalformedStream`] if `bytes` is not exactly one sample long.
    pub fn decode_sample(self, bytes: &[u8]) -> SignalResult<f64> {
        let expected = self.bytes_per_sample();
        if bytes.len() != expected {
            return Err(SignalError::MalformedStream {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(match self {
            Self::Pcm16 => Pcm16.dequantize(Pcm16.decode(&fixed::<2>(bytes))),
            Self::Pcm32 => Pcm32.dequantize(Pcm32.decode(&fixed::<4>(bytes))),
            Self::Float64 => Float64.dequantize(Float64.decode(&fixed::<8>(bytes))),
        })
    }

    /// Decodes a raw headerless stream into samples, in order.
    ///
    /// # Errors
    /// Returns [`SignalError::MalformedStream`] if the stream ends with a partial sample.
    pub fn decode_stream(self, bytes: &[u8]) -> SignalResult<Vec<f64>> {
        let width = self.bytes_per_sample();
        if bytes.len() % width != 0 {
            return Err(SignalError::MalformedStream {
                expected: width,
                actual: bytes.len(),
            });
        }
        bytes
            .chunks_exact(width)
            .map(|chunk| self.decode_sample(chunk))
            .collect()
    }
}

/// Copies a slice whose length has already been checked into a fixed array.
fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SampleFormat {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pcm16" | "s16le" => Ok(Self::Pcm16),
            "pcm32" | "s32le" => Ok(Self::Pcm32),
            "float64" | "f64le" => Ok(Self::Float64),
            other => Err(SignalError::invalid_parameter(
                "format",
                format!("unknown format '{other}', expected one of {SUPPORTED_FORMATS:?}"),
            )),
        }
    }
}

/// One encoded sample held on the stack.
///
/// Avoids a heap allocation per sample on the write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedSample {
    bytes: [u8; MAX_SAMPLE_BYTES],
    len: u8,
}

impl EncodedSample {
    #[inline]
    fn from_le(encoded: &[u8]) -> Self {
        let mut bytes = [0u8; MAX_SAMPLE_BYTES];
        bytes[..encoded.len()].copy_from_slice(encoded);
        Self {
            bytes,
            len: encoded.len() as u8,
        }
    }

    /// The encoded little-endian bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of encoded bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// True if no bytes are held, which is never the case for a converted sample.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for EncodedSample {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
