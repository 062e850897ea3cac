//! Bounded iteration over packed-repeated payloads.
//!
//! A packed field is a length-delimited payload holding back-to-back scalar or
//! fixed-width elements with no per-element key. `decode_packed` validates the
//! outer span first, then walks it with any element kernel from
//! `kernels::scalar` or `kernels::fixed`.
//!
//! The walk runs against the buffer truncated at the payload end, so an
//! element can never read into whatever follows the field. It is bounded twice:
//! by the validated length (every element consumes at least one byte) and by
//! `CodecConfig::max_packed_elements`.

use log::debug;

use crate::config::CodecConfig;
use crate::error::WireError;
use crate::kernels::length_delimited;
use crate::types::{DecodeResult, Decoded};

/// Decodes a packed-repeated field whose length prefix starts at `pos`.
///
/// On success `new_position` is the end of the payload and the value holds
/// every element in order.
pub fn decode_packed<T, F>(
    buffer: &[u8],
    pos: usize,
    config: &CodecConfig,
    decode_element: F,
) -> DecodeResult<Vec<T>>
where
    F: Fn(&[u8], usize) -> DecodeResult<T>,
{
    let span = length_delimited::decode_packed_repeated(buffer, pos)?;
    let end = span.end();
    let payload_view = &buffer[..end];

    // `length` is a hard upper bound on the element count; the config may be tighter.
    let max_elements = config.max_packed_elements.min(span.length);
    let mut values = Vec::with_capacity(max_elements.min(64));
    let mut cursor = span.new_position;

    while cursor < end {
        if values.len() == config.max_packed_elements {
            debug!(
                "packed field at {} exceeds {} elements",
                pos, config.max_packed_elements
            );
            return Err(WireError::PackedElementLimit(config.max_packed_elements));
        }
        let Decoded {
            new_position,
            value,
        } = decode_element(payload_view, cursor)?;
        values.push(value);
        cursor = new_position;
    }

    Ok(Decoded::new(end, values))
}

/// Encodes `values` with `encode_element`, concatenates them and adds the length prefix.
pub fn encode_packed<T, F>(values: &[T], encode_element: F) -> Vec<u8>
where
    T: Copy,
    F: Fn(T) -> Vec<u8>,
{
    let mut elements = Vec::new();
    for &value in values {
        elements.extend_from_slice(&encode_element(value));
    }
    length_delimited::encode_packed_repeated(&elements)
}
