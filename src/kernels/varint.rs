//! This module contains the pure, stateless kernels for base-128 varint
//! (LEB128) encoding and decoding of unsigned 64-bit integers.
//!
//! Unlike a permissive LEB128 reader, the decoder here accepts exactly the
//! byte sequences `encode` produces and nothing else:
//!
//! * at most 10 bytes, and the 10th byte may carry only bit 63;
//! * no trailing zero group (`0x80 0x00` is not a valid encoding of 0).
//!
//! Every loop is bounded by `MAX_VARINT_LEN`. The kernels are panic-free.

use crate::error::WireError;
use crate::types::{DecodeResult, Decoded};

/// The longest canonical varint: ceil(64 / 7) bytes.
pub const MAX_VARINT_LEN: usize = 10;

const PAYLOAD_MASK: u8 = 0x7F;
const CONTINUATION_BIT: u8 = 0x80;

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Returns the number of bytes `encode` produces for `value` (1 to 10).
#[inline]
pub fn encoded_len(value: u64) -> usize {
    let significant_bits = 64 - (value | 1).leading_zeros() as usize;
    significant_bits.div_ceil(7)
}

/// Appends the minimal base-128 encoding of `value` to `buffer`.
pub fn encode_into(value: u64, buffer: &mut Vec<u8>) {
    let mut current_value = value;
    loop {
        let byte = (current_value as u8) & PAYLOAD_MASK;
        current_value >>= 7;
        if current_value == 0 {
            buffer.push(byte);
            return;
        }
        buffer.push(byte | CONTINUATION_BIT);
    }
}

/// Encodes `value` into a fresh, exactly-sized byte vector.
pub fn encode(value: u64) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(encoded_len(value));
    encode_into(value, &mut buffer);
    buffer
}

/// Decodes one canonical varint starting at `pos`.
///
/// # Errors
/// * `OutOfBounds` if the buffer ends before a terminating byte.
/// * `MalformedVarint` if the encoding needs more than 64 bits or 10 bytes.
/// * `NonCanonicalEncoding` if the last byte is a zero group following a continuation.
pub fn decode(buffer: &[u8], pos: usize) -> DecodeResult<u64> {
    let mut result: u64 = 0;

    for index in 0..MAX_VARINT_LEN {
        let byte_pos = pos
            .checked_add(index)
            .ok_or_else(|| WireError::out_of_bounds(pos, buffer))?;
        let byte = *buffer
            .get(byte_pos)
            .ok_or_else(|| WireError::out_of_bounds(byte_pos, buffer))?;

        let payload = u64::from(byte & PAYLOAD_MASK);
        // The 10th group sits at bit 63: only its lowest bit fits in a u64.
        if index == MAX_VARINT_LEN - 1 && payload > 1 {
            return Err(WireError::MalformedVarint(pos));
        }
        result |= payload << (7 * index);

        if byte & CONTINUATION_BIT == 0 {
            // A zero terminating group after a continuation adds nothing: the
            // same value has a shorter encoding.
            if index > 0 && byte == 0 {
                return Err(WireError::NonCanonicalEncoding(pos));
            }
            return Ok(Decoded::new(byte_pos + 1, result));
        }
    }

    // The 10th byte still had its continuation bit set.
    Err(WireError::MalformedVarint(pos))
}
