// Delta-row command bytes.
//
// Every record opens with one header byte:
//   bits 7-5: run length - 1 (lengths 1..=8)
//   bits 4-0: offset, saturated at 31
// A saturated offset is extended by continuation bytes, each adding up to
// 255. The sequence ends with the first byte below 255, so an extension
// that lands exactly on a multiple of 255 is closed by a trailing 0.

/// Longest replacement run a single record can carry (3-bit length field).
pub const MAX_DIFF_LENGTH: usize = 8;

/// Largest offset representable in the header byte alone.
pub const MAX_HEADER_OFFSET: usize = 31;

/// Largest value carried by one continuation byte.
pub const MAX_CONTINUATION: usize = 255;

const LENGTH_SHIFT: u32 = 5;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Pack a run length and offset into the record header byte.
#[inline]
pub fn header_byte(length: usize, offset: usize) -> u8 {
    debug_assert!((1..=MAX_DIFF_LENGTH).contains(&length));
    (((length - 1) as u8) << LENGTH_SHIFT) | offset.min(MAX_HEADER_OFFSET) as u8
}

/// Append the command bytes for one record (header plus any continuation
/// bytes) to `out`. Returns the number of bytes written.
pub fn write_command(out: &mut Vec<u8>, length: usize, offset: usize) -> usize {
    out.push(header_byte(length, offset));
    if offset < MAX_HEADER_OFFSET {
        return 1;
    }

    let start = out.len();
    let mut remainder = offset - MAX_HEADER_OFFSET;
    loop {
        out.push(remainder.min(MAX_CONTINUATION) as u8);
        if remainder < MAX_CONTINUATION {
            break;
        }
        remainder -= MAX_CONTINUATION;
    }
    1 + out.len() - start
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Return the number of command bytes `write_command` emits for `offset`.
#[inline]
pub fn sizeof_command(offset: usize) -> usize {
    match offset.checked_sub(MAX_HEADER_OFFSET) {
        Some(remainder) => 2 + remainder / MAX_CONTINUATION,
        None => 1,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
