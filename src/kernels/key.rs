//! Field key (tag) kernels: `(field_number << 3) | wire_type`, carried as a varint.

use crate::error::WireError;
use crate::kernels::varint;
use crate::types::{DecodeResult, Key, WireType};

/// Decodes a field key starting at `pos`.
///
/// Fails if the underlying varint fails, if the wire type is outside
/// {0, 1, 2, 5} (group markers 3 and 4 included), or if the field number is 0.
pub fn decode(buffer: &[u8], pos: usize) -> DecodeResult<Key> {
    varint::decode(buffer, pos)?.try_map(|raw| {
        let wire_type = WireType::try_from(raw & 0b111)?;
        let field_number = raw >> 3;
        if field_number == 0 {
            return Err(WireError::InvalidDiscriminant {
                kind: "field number",
                value: 0,
            });
        }
        Ok(Key::new(field_number, wire_type))
    })
}

/// Decodes a key and requires it to be exactly `(field_number, wire_type)`.
pub fn decode_expected(
    buffer: &[u8],
    pos: usize,
    field_number: u64,
    wire_type: WireType,
) -> DecodeResult<Key> {
    let decoded = decode(buffer, pos)?;
    let found = decoded.value;
    if found.field_number != field_number || found.wire_type != wire_type {
        return Err(WireError::UnexpectedKey {
            expected_field: field_number,
            expected_wire_type: wire_type,
            found_field: found.field_number,
            found_wire_type: found.wire_type,
        });
    }
    Ok(decoded)
}

/// Encodes a field key.
///
/// `field_number` must be at least 1 and small enough that `field_number << 3`
/// fits in 64 bits; this is a trusted-input boundary and is not re-validated
/// in release builds.
pub fn encode(field_number: u64, wire_type: WireType) -> Vec<u8> {
    debug_assert!(field_number >= 1, "field numbers start at 1");
    debug_assert!(field_number <= u64::MAX >> 3, "field number overflows the key");
    varint::encode(Key::new(field_number, wire_type).to_raw())
}
