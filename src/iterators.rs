//! Lazy iteration over generated samples.
//!
//! [`SampleIter`] yields the same gated values as [`SineWave::generate`] one at a time,
//! without materialising the buffer. Because every sample is a pure function of its
//! index, the iterator can be recreated at any point and supports random access through
//! [`Iterator::nth`] and iteration from both ends.
//!
//! # Usage
//!
//! ```rust
//! use sine_samples::{SignalConfig, SineWave};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), sine_samples::SignalError> {
//! let wave = SineWave::new(SignalConfig::new(440.0, Duration::from_millis(10))?)?;
//!
//! let peak = wave.samples().fold(0.0f64, |acc, x| acc.max(x.abs()));
//! assert!(peak <= 1.0);
//! assert_eq!(wave.samples().len(), wave.sample_count());
//! # Ok(())
//! # }
//! ```

use std::iter::FusedIterator;

use crate::SineWave;

/// Iterator over the gated samples of a [`SineWave`], in index order.
#[derive(Debug, Clone)]
pub struct SampleIter<'a> {
    wave: &'a SineWave,
    current_sample: usize,
    total_samples: usize,
}

impl<'a> SampleIter<'a> {
    pub(crate) fn new(wave: &'a SineWave) -> Self {
        Self {
            wave,
            current_sample: 0,
            total_samples: wave.sample_count(),
        }
    }

    /// Index of the next sample returned by [`next`](Iterator::next).
    pub const fn position(&self) -> usize {
        self.current_sample
    }
}

impl Iterator for SampleIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_sample >= self.total_samples {
            return None;
        }
        let value = self.wave.sample_at(self.current_sample);
        self.current_sample += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_samples - self.current_sample;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.current_sample = self
            .current_sample
            .saturating_add(n)
            .min(self.total_samples);
        self.next()
    }
}

impl DoubleEndedIterator for SampleIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current_sample >= self.total_samples {
            return None;
        }
        self.total_samples -= 1;
        Some(self.wave.sample_at(self.total_samples))
    }
}

impl ExactSizeIterator for SampleIter<'_> {}

impl FusedIterator for SampleIter<'_> {}
