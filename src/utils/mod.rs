//! Utility functions for signal generation.
//!
//! # Modules
//!
//! - [`audio_math`] - Nyquist gate and time/sample conversions
//! - [`generation`] - Sine signal generation

pub mod audio_math;
pub mod generation;

pub use audio_math::{
    apply_nyquist_gate, duration_from_secs, exceeds_nyquist, nyquist_limit, samples_to_seconds,
    seconds_to_samples,
};
pub use generation::{SineWave, sine_wave};
