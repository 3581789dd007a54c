// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![cfg_attr(not(test), warn(clippy::unwrap_used))] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_safety_doc)] // Docs for `unsafe` functions
#![deny(missing_docs)] // Documentation is a must for release

//! # SineSamples
//!
//! Synthesizes discrete-time sine signals from a handful of physical parameters and
//! serializes them as raw fixed-width audio samples.
//!
//! The pipeline runs in one direction:
//!
//! `SignalConfig -> SineWave (generate + Nyquist gate) -> sample buffer -> SampleFormat (quantize + encode) -> io::Write`
//!
//! ## Quick Start
//!
//! ```rust
//! use sine_samples::{SampleFormat, SignalConfig, SineWave};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), sine_samples::SignalError> {
//! let config = SignalConfig::builder(440.0, Duration::from_secs(1))
//!     .amplitude(0.5)
//!     .format(SampleFormat::Pcm16)
//!     .build()?;
//! let wave = SineWave::new(config)?;
//!
//! let mut sink = Vec::new();
//! let written = wave.write_to(&mut sink)?;
//! assert_eq!(written, 44_100 * 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! | Format    | Quantize                                   | Bytes |
//! |-----------|--------------------------------------------|-------|
//! | `Pcm16`   | clamp to `[-1, 1]`, `* 32767`, truncate    | 2     |
//! | `Pcm32`   | clamp to `[-1, 1]`, `* 2147483647`, truncate | 4   |
//! | `Float64` | raw IEEE-754 bits                           | 8     |
//!
//! All formats are little-endian. The output carries no header; sample rate, channel
//! count (always mono) and format must be communicated separately.
//!
//! ## Nyquist Gate
//!
//! When the configured frequency is at or above half the sampling rate the whole signal
//! is silenced: every sample is `0.0`. The boundary is inclusive.
//!
//! ## Error Handling
//!
//! ```rust
//! use sine_samples::{SignalConfig, SignalError};
//! use std::time::Duration;
//!
//! match SignalConfig::new(-1.0, Duration::from_secs(1)) {
//!     Err(SignalError::InvalidParameter { parameter, reason }) => {
//!         eprintln!("{parameter}: {reason}");
//!     }
//!     Err(other) => eprintln!("Other error: {other}"),
//!     Ok(_) => unreachable!(),
//! }
//! ```
//!
//! ## Features
//!
//! - `parallel-processing`: [`SineWave::generate_parallel`] on the rayon thread pool

mod error;

pub mod config;
pub mod iterators;
mod repr;
pub mod serialization;
/// Core traits for sample encoding.
pub mod traits;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::config::{
    DEFAULT_AMPLITUDE, DEFAULT_SAMPLING_RATE, MAX_SAMPLE_COUNT, SignalConfig, SignalConfigBuilder,
};
pub use crate::error::{SignalError, SignalResult};
pub use crate::iterators::SampleIter;
pub use crate::repr::{EncodedSample, MAX_SAMPLE_BYTES, SUPPORTED_FORMATS, SampleFormat};
pub use crate::serialization::{encode_samples, write_samples};
pub use crate::traits::{Float64, Pcm16, Pcm32, SampleEncoder, clamp};
pub use crate::utils::{SineWave, audio_math, generation, sine_wave};
