//! Core traits describing fixed-width sample encodings.
//!
//! Every output format is a pair of steps: *quantize* a floating-point sample into a
//! numeric representation, then *encode* that representation as little-endian bytes.
//! [`SampleEncoder`] captures both steps together with the bit depth of the format.
//!
//! ## Supported Encoders
//! - [`Pcm16`]: clamp to `[-1.0, 1.0]`, scale by `32767`, truncate to `i16`
//! - [`Pcm32`]: clamp to `[-1.0, 1.0]`, scale by `2147483647`, truncate to `i32`
//! - [`Float64`]: raw IEEE-754 bit pattern of the sample, no clamping or scaling
//!
//! ## Example
//! ```rust
//! use sine_samples::{Pcm16, SampleEncoder};
//!
//! let bytes = Pcm16.convert_sample(0.5);
//! assert_eq!(Pcm16.quantize(0.5), 16383);
//! assert_eq!(bytes, [0xFF, 0x3F]);
//! ```

use num_traits::{FromBytes, ToBytes};
use std::fmt::Debug;

/// Bounds `value` to `[min, max]`, mapping out-of-range inputs to the nearest boundary.
///
/// Unlike [`f64::clamp`] this never panics. `NaN` is passed through unchanged and is
/// later mapped to `0` by the integer cast in the PCM quantizers.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Capability set shared by every fixed-width sample format.
///
/// Implementors only provide [`quantize`](SampleEncoder::quantize) and
/// [`dequantize`](SampleEncoder::dequantize); byte encoding is little-endian for all
/// formats and comes from `num-traits`.
pub trait SampleEncoder: Copy + Debug + Default + Send + Sync {
    /// Numeric representation produced by [`quantize`](SampleEncoder::quantize).
    type Repr: Copy + Debug + PartialEq + ToBytes + FromBytes;

    /// Bit depth of the encoded sample.
    const BITS: u32;

    /// Short lowercase name used in logs and on the command line.
    const LABEL: &'static str;

    /// Bit depth of the encoded sample.
    #[inline]
    fn bit_depth(&self) -> u32 {
        Self::BITS
    }

    /// Encoded length of one sample in bytes (`bit_depth / 8`).
    #[inline]
    fn bytes_per_sample(&self) -> usize {
        (Self::BITS / 8) as usize
    }

    /// Maps a floating-point sample onto this format's numeric representation.
    ///
    /// Must be total: out-of-range, `NaN` and infinite inputs map to some defined value.
    fn quantize(&self, sample: f64) -> Self::Repr;

    /// Maps a numeric representation back to a floating-point sample.
    fn dequantize(&self, value: Self::Repr) -> f64;

    /// Encodes a quantized value as little-endian bytes.
    #[inline]
    fn encode(&self, value: Self::Repr) -> <Self::Repr as ToBytes>::Bytes {
        ToBytes::to_le_bytes(&value)
    }

    /// Decodes little-endian bytes back into the numeric representation.
    #[inline]
    fn decode(&self, bytes: &<Self::Repr as FromBytes>::Bytes) -> Self::Repr {
        <Self::Repr as FromBytes>::from_le_bytes(bytes)
    }

    /// Quantizes and encodes a sample in one step.
    #[inline]
    fn convert_sample(&self, sample: f64) -> <Self::Repr as ToBytes>::Bytes {
        self.encode(self.quantize(sample))
    }
}

/// 16-bit signed little-endian PCM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pcm16;

/// 32-bit signed little-endian PCM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pcm32;

/// 64-bit IEEE-754 little-endian float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Float64;

// ========================
// Encoder Macros
// ========================

/// Generates a saturating PCM encoder: clamp to `[-1.0, 1.0]`, scale, truncate toward zero.
macro_rules! impl_pcm_encoder {
    ($name:ident, $repr:ty, $bits:expr, $scale:expr, $label:expr) => {
        impl SampleEncoder for $name {
            type Repr = $repr;
            const BITS: u32 = $bits;
            const LABEL: &'static str = $label;

            #[inline(always)]
            fn quantize(&self, sample: f64) -> $repr {
                // float -> int `as` truncates toward zero, saturates and maps NaN to 0
                (clamp(sample, -1.0, 1.0) * $scale) as $repr
            }

            #[inline(always)]
            fn dequantize(&self, value: $repr) -> f64 {
                value as f64 / $scale
            }
        }
    };
}

impl_pcm_encoder!(Pcm16, i16, 16, 32_767.0, "pcm16");
impl_pcm_encoder!(Pcm32, i32, 32, 2_147_483_647.0, "pcm32");

impl SampleEncoder for Float64 {
    type Repr = u64;
    const BITS: u32 = 64;
    const LABEL: &'static str = "float64";

    #[inline(always)]
    fn quantize(&self, sample: f64) -> u64 {
        sample.to_bits()
    }

    #[inline(always)]
    fn dequantize(&self, value: u64) -> f64 {
        f64::from_bits(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let cases = [
            (0.5, 0.5),
            (-0.5, -0.5),
            (1.0, 1.0),
            (-1.0, -1.0),
            (1.5, 1.0),
            (-1.5, -1.0),
            (f64::MAX, 1.0),
            (f64::MIN, -1.0),
            (f64::INFINITY, 1.0),
            (f64::NEG_INFINITY, -1.0),
        ];
        for (input, expected) in cases {
            assert_eq!(clamp(input, -1.0, 1.0), expected, "clamp({input})");
        }
        assert!(clamp(f64::NAN, -1.0, 1.0).is_nan());
    }

    #[test]
    fn test_bit_depths() {
        assert_eq!(Pcm16.bit_depth(), 16);
        assert_eq!(Pcm32.bit_depth(), 32);
        assert_eq!(Float64.bit_depth(), 64);

        assert_eq!(Pcm16.bytes_per_sample(), 2);
        assert_eq!(Pcm32.bytes_per_sample(), 4);
        assert_eq!(Float64.bytes_per_sample(), 8);
    }

    #[test]
    fn test_pcm16_convert_sample() {
        assert_eq!(Pcm16.quantize(0.5), 16383);
        assert_eq!(Pcm16.convert_sample(0.5), [0xFF, 0x3F]);

        assert_eq!(Pcm16.quantize(-0.5), -16383);
        assert_eq!(Pcm16.convert_sample(-0.5), [0x01, 0xC0]);

        assert_eq!(Pcm16.convert_sample(0.0), [0x00, 0x00]);
        assert_eq!(Pcm16.convert_sample(1.0), [0xFF, 0x7F]);
        assert_eq!(Pcm16.convert_sample(-1.0), [0x01, 0x80]);
    }

    #[test]
    fn test_pcm16_saturates() {
        let top = Pcm16.quantize(1.0);
        let bottom = Pcm16.quantize(-1.0);
        for x in [1.0000001, 2.0, 1e9, f64::MAX, f64::INFINITY] {
            assert_eq!(Pcm16.quantize(x), top, "quantize({x})");
            assert_eq!(Pcm16.quantize(-x), bottom, "quantize({})", -x);
        }
        assert_eq!(top, i16::MAX);
        assert_eq!(bottom, -i16::MAX);
    }

    #[test]
    fn test_pcm32_convert_sample() {
        assert_eq!(Pcm32.quantize(0.5), 1_073_741_823);
        assert_eq!(Pcm32.convert_sample(0.5), [0xFF, 0xFF, 0xFF, 0x3F]);
        assert_eq!(Pcm32.quantize(1.0), i32::MAX);
        assert_eq!(Pcm32.quantize(-1.0), -i32::MAX);
        assert_eq!(Pcm32.convert_sample(0.0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_pcm32_saturates() {
        for x in [3.0, 1e300, f64::INFINITY] {
            assert_eq!(Pcm32.quantize(x), Pcm32.quantize(1.0));
            assert_eq!(Pcm32.quantize(-x), Pcm32.quantize(-1.0));
        }
    }

    #[test]
    fn test_pcm_nan_maps_to_zero() {
        assert_eq!(Pcm16.quantize(f64::NAN), 0);
        assert_eq!(Pcm32.quantize(f64::NAN), 0);
        assert_eq!(Pcm16.convert_sample(f64::NAN), [0, 0]);
    }

    #[test]
    fn test_pcm_truncates_toward_zero() {
        // 0.99999 * 32767 = 32766.67..
        assert_eq!(Pcm16.quantize(0.99999), 32766);
        assert_eq!(Pcm16.quantize(-0.99999), -32766);
        assert_eq!(Pcm16.quantize(1.0 / 32767.0 * 0.5), 0);
    }

    #[test]
    fn test_float64_bit_pattern() {
        assert_eq!(Float64.convert_sample(1.0), 1.0f64.to_le_bytes());
        assert_eq!(Float64.convert_sample(-0.25), (-0.25f64).to_le_bytes());
        assert_eq!(Float64.quantize(2.5), 2.5f64.to_bits());
    }

    #[test]
    fn test_float64_special_values_round_trip() {
        let payload_nan = f64::from_bits(0x7FF8_0000_0000_BEEF);
        for value in [
            f64::NAN,
            payload_nan,
            f64::INFINITY,
            f64::NEG_INFINITY,
            0.0,
            -0.0,
            f64::MIN_POSITIVE,
            f64::MAX,
        ] {
            let bytes = Float64.convert_sample(value);
            let decoded = Float64.dequantize(Float64.decode(&bytes));
            assert_eq!(decoded.to_bits(), value.to_bits(), "round trip of {value:?}");
        }
    }

    #[test]
    fn test_pcm_dequantize() {
        assert_eq!(Pcm16.dequantize(32767), 1.0);
        assert_eq!(Pcm16.dequantize(0), 0.0);
        assert_eq!(Pcm32.dequantize(-2_147_483_647), -1.0);
        let bytes = Pcm16.convert_sample(0.5);
        let back = Pcm16.dequantize(Pcm16.decode(&bytes));
        assert!((back - 0.5).abs() < 1.0 / 32767.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Pcm16::LABEL, "pcm16");
        assert_eq!(Pcm32::LABEL, "pcm32");
        assert_eq!(Float64::LABEL, "float64");
    }
}
