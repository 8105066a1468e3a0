// Delta-row encoder.
//
// Walks `input` and `seed` in lockstep and splits them into alternating runs
// of equal bytes (copied from the seed at decode time) and differing bytes
// (sent as literals). Each differing run becomes one record: command bytes
// from `command`, then the literal bytes taken from `input`.

use thiserror::Error;

use super::command::{self, MAX_DIFF_LENGTH};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// `input` and `seed` must cover the same number of bytes.
    #[error("input and seed lengths differ (input {input} bytes, seed {seed} bytes)")]
    LengthMismatch { input: usize, seed: usize },
}

// ---------------------------------------------------------------------------
// Difference
// ---------------------------------------------------------------------------

/// One run of differing bytes and the count of equal bytes before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Difference {
    /// Differing bytes covered, `1..=MAX_DIFF_LENGTH`.
    len: usize,
    /// Index of the first differing byte in `input`.
    start: usize,
    /// Equal bytes since the previous run closed (or since the row start).
    offset: usize,
}

impl Difference {
    /// Serialize this record: command bytes followed by its literals.
    fn write(&self, input: &[u8], out: &mut Vec<u8>) {
        log::trace!(
            "record len={} start={} offset={}",
            self.len,
            self.start,
            self.offset
        );
        out.reserve(command::sizeof_command(self.offset) + self.len);
        command::write_command(out, self.len, self.offset);
        out.extend_from_slice(&input[self.start..self.start + self.len]);
    }
}

// ---------------------------------------------------------------------------
// High-level encode
// ---------------------------------------------------------------------------

/// Encode `input` as a delta against `seed`.
///
/// Returns an empty buffer when the two are identical (including when both
/// are empty).
///
/// # Example
/// ```
/// let delta = deltarow::encode(&[0, 0, 2, 2], &[0, 0, 1, 1]).unwrap();
/// assert_eq!(delta, [(1 << 5) | 2, 2, 2]);
/// ```
pub fn encode(input: &[u8], seed: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encode_into(input, seed, &mut out)?;
    Ok(out)
}

/// Encode `input` against `seed`, appending the records to `output`.
///
/// `output` is left untouched if the lengths differ.
pub fn encode_into(input: &[u8], seed: &[u8], output: &mut Vec<u8>) -> Result<(), EncodeError> {
    if input.len() != seed.len() {
        return Err(EncodeError::LengthMismatch {
            input: input.len(),
            seed: seed.len(),
        });
    }

    let base = output.len();
    let mut records = 0usize;
    let mut len = 0usize;
    let mut offset = 0usize;

    for (i, (&a, &b)) in input.iter().zip(seed).enumerate() {
        let equal = a == b;

        // Close the open run when it ends or when it is full.
        if (equal && len > 0) || (!equal && len == MAX_DIFF_LENGTH) {
            Difference {
                len,
                start: i - len,
                offset,
            }
            .write(input, output);
            records += 1;
            len = 0;
            offset = 0;
        }

        if equal {
            offset += 1;
        } else {
            len += 1;
        }
    }

    if len > 0 {
        Difference {
            len,
            start: input.len() - len,
            offset,
        }
        .write(input, output);
        records += 1;
    }

    log::debug!(
        "encoded {} byte row: {records} records, {} bytes",
        input.len(),
        output.len() - base
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
