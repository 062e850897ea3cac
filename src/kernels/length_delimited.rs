//! Wire-type-2 kernels: a varint length prefix followed by that many raw bytes.
//!
//! Decoding validates the bounds of the payload and returns them as a
//! `LengthDelimitedSpan`; the payload is never copied or interpreted here.
//! `string`, `bytes`, `embedded message` and `packed repeated` are all this
//! same primitive under the protobuf field-type names.

use log::trace;

use crate::error::WireError;
use crate::kernels::varint;
use crate::types::{DecodeResult, Decoded, LengthDelimitedSpan};

//==================================================================================
// 1. Core Primitive
//==================================================================================

/// Decodes a length prefix at `pos` and validates that the payload fits in `buffer`.
///
/// The bounds check is overflow-safe: a canonical prefix may declare up to
/// `u64::MAX` bytes, and neither the conversion to `usize` nor the addition to
/// the position may wrap.
pub fn decode(buffer: &[u8], pos: usize) -> Result<LengthDelimitedSpan, WireError> {
    let Decoded {
        new_position,
        value: length,
    } = varint::decode(buffer, pos)?;

    let overflow = || WireError::LengthOverflow {
        position: new_position,
        length,
        buffer_len: buffer.len(),
    };

    let length_usize = usize::try_from(length).map_err(|_| overflow())?;
    let end = new_position.checked_add(length_usize).ok_or_else(overflow)?;
    if end > buffer.len() {
        trace!(
            "length prefix at {} declares {} bytes, only {} remain",
            pos,
            length,
            buffer.len() - new_position
        );
        return Err(overflow());
    }

    Ok(LengthDelimitedSpan {
        new_position,
        length: length_usize,
    })
}

/// Prefixes `payload` with its varint-encoded length.
pub fn encode(payload: &[u8]) -> Vec<u8> {
    let length = payload.len() as u64;
    let mut out = Vec::with_capacity(varint::encoded_len(length) + payload.len());
    varint::encode_into(length, &mut out);
    out.extend_from_slice(payload);
    out
}

//==================================================================================
// 2. Field-Type Specializations
//==================================================================================

/// Strings are validated like bytes; no charset check is performed.
pub fn decode_string(buffer: &[u8], pos: usize) -> Result<LengthDelimitedSpan, WireError> {
    decode(buffer, pos)
}

pub fn decode_bytes(buffer: &[u8], pos: usize) -> Result<LengthDelimitedSpan, WireError> {
    decode(buffer, pos)
}

/// The nested message occupies `span.new_position..span.end()`; decoding its
/// fields is the caller's job (see `kernels::embedded`).
pub fn decode_embedded_message(buffer: &[u8], pos: usize) -> Result<LengthDelimitedSpan, WireError> {
    decode(buffer, pos)
}

/// The elements occupy `span.new_position..span.end()`; iterating them is the
/// caller's job (see `kernels::packed`).
pub fn decode_packed_repeated(buffer: &[u8], pos: usize) -> Result<LengthDelimitedSpan, WireError> {
    decode(buffer, pos)
}

/// Returns the raw bytes of a string field; `new_position` is the end of the payload.
pub fn decode_string_payload(buffer: &[u8], pos: usize) -> DecodeResult<&[u8]> {
    decode_payload(buffer, pos)
}

/// Returns the raw bytes of a bytes field; `new_position` is the end of the payload.
pub fn decode_bytes_payload(buffer: &[u8], pos: usize) -> DecodeResult<&[u8]> {
    decode_payload(buffer, pos)
}

fn decode_payload(buffer: &[u8], pos: usize) -> DecodeResult<&[u8]> {
    let span = decode(buffer, pos)?;
    Ok(Decoded::new(span.end(), span.payload(buffer)?))
}

pub fn encode_string(value: &str) -> Vec<u8> {
    encode(value.as_bytes())
}

pub fn encode_bytes(value: &[u8]) -> Vec<u8> {
    encode(value)
}

/// `message` is the already-encoded sub-message, treated as opaque payload.
pub fn encode_embedded_message(message: &[u8]) -> Vec<u8> {
    encode(message)
}

/// `elements` is the caller's concatenation of scalar-encoded elements.
pub fn encode_packed_repeated(elements: &[u8]) -> Vec<u8> {
    encode(elements)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_span_after_key() {
        // Field 1 bytes = deadbeef.
        let buffer = [0x0A, 0x04, 0xDE, 0xAD, 0xBE, 0xEF];
        let span = decode(&buffer, 1).unwrap();
        assert_eq!(
            span,
            LengthDelimitedSpan {
                new_position: 2,
                length: 4
            }
        );
        assert_eq!(span.payload(&buffer).unwrap(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_empty_payload() {
        let span = decode(&[0x00], 0).unwrap();
        assert_eq!(span.length, 0);
        assert_eq!(span.end(), 1);
        assert_eq!(encode(&[]), vec![0x00]);
    }

    #[test]
    fn test_declared_length_past_end() {
        // Length prefix 300 in a 2-byte buffer.
        assert_eq!(
            decode(&[0xAC, 0x02], 0),
            Err(WireError::LengthOverflow {
                position: 2,
                length: 300,
                buffer_len: 2
            })
        );
        // One byte short.
        assert!(matches!(
            decode(&[0x03, 0x01, 0x02], 0),
            Err(WireError::LengthOverflow { .. })
        ));
    }

    #[test]
    fn test_maximal_length_does_not_wrap() {
        let buffer = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        assert!(matches!(
            decode(&buffer, 0),
            Err(WireError::LengthOverflow {
                length: u64::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_prefix_failure_propagates() {
        let buffer = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF1];
        assert_eq!(decode_string(&buffer, 0), Err(WireError::MalformedVarint(0)));
        assert_eq!(decode_bytes(&[0x80, 0x00], 0), Err(WireError::NonCanonicalEncoding(0)));
    }

    #[test]
    fn test_string_payload_returns_end_position() {
        let encoded = encode_string("foobar");
        let mut buffer = vec![0x0A];
        buffer.extend_from_slice(&encoded);

        let decoded = decode_string_payload(&buffer, 1).unwrap();
        assert_eq!(decoded.new_position, buffer.len());
        assert_eq!(decoded.value, b"foobar");
    }

    #[test]
    fn test_string_is_not_charset_checked() {
        let buffer = encode_bytes(&[0xFF, 0xFE]);
        let decoded = decode_string_payload(&buffer, 0).unwrap();
        assert_eq!(decoded.value, &[0xFF, 0xFE]);
    }

    #[test]
    fn test_encode_specializations_share_framing() {
        let payload = [0x08, 0xAC, 0x02];
        assert_eq!(encode_embedded_message(&payload), vec![0x03, 0x08, 0xAC, 0x02]);
        assert_eq!(encode_packed_repeated(&payload), encode_bytes(&payload));

        let long = vec![0x55; 200];
        let encoded = encode_bytes(&long);
        assert_eq!(&encoded[..2], &[0xC8, 0x01]);
        assert_eq!(encoded.len(), 202);
    }
}
