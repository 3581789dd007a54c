//! Raw sample serialization.
//!
//! Output is a headerless, mono, little-endian byte stream: the concatenation of every
//! sample's encoding in index order. No sample rate, channel count or bit depth is
//! embedded, so consumers must be told the format out of band.
//!
//! Encoding is strictly sequential. The byte framing depends on sample order, so
//! sample `n` always occupies bytes `n * width .. (n + 1) * width`.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::{SampleFormat, SignalError, SignalResult};

/// Encodes `samples` in order and writes each one to `sink`.
///
/// Returns the total number of bytes written. On success this is
/// `samples.len() * format.bytes_per_sample()`.
///
/// # Errors
/// Stops at the first failed write and returns [`SignalError::WriteFailure`] with the
/// number of bytes the sink had accepted so far. Failed writes are not retried and
/// partial output is left for the caller to deal with. As with [`Write::write_all`],
/// [`io::ErrorKind::Interrupted`] is not a failure and the same bytes are offered again.
pub fn write_samples<W: Write + ?Sized>(
    samples: &[f64],
    format: SampleFormat,
    sink: &mut W,
) -> SignalResult<u64> {
    debug!(
        format = %format,
        samples = samples.len(),
        bytes = samples.len() * format.bytes_per_sample(),
        "writing samples"
    );

    let mut total_bytes_written: u64 = 0;
    for (index, &sample) in samples.iter().enumerate() {
        let encoded = format.convert_sample(sample);
        let mut pending = encoded.as_bytes();
        while !pending.is_empty() {
            match sink.write(pending) {
                Ok(0) => {
                    let e = io::Error::new(io::ErrorKind::WriteZero, "sink accepted no bytes");
                    return Err(reject(index, total_bytes_written, e));
                }
                Ok(n) => {
                    total_bytes_written += n as u64;
                    pending = &pending[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(reject(index, total_bytes_written, e)),
            }
        }
    }

    debug!(bytes_written = total_bytes_written, "finished writing samples");
    Ok(total_bytes_written)
}

fn reject(index: usize, bytes_written: u64, e: io::Error) -> SignalError {
    trace!(index, bytes_written, error = %e, "sink rejected sample");
    SignalError::write_failure(bytes_written, e)
}

/// Encodes `samples` in order into a new byte buffer.
pub fn encode_samples(samples: &[f64], format: SampleFormat) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(samples.len() * format.bytes_per_sample());
    for &sample in samples {
        buffer.extend_from_slice(format.convert_sample(sample).as_bytes());
    }
    buffer
}
