//! This module contains the wire-type-0 scalar kernels: int32, uint32, int64,
//! uint64, sint32, sint64, bool and enum.
//!
//! All eight decoders share one varint walk (`decode_narrowed`) and differ only
//! in the narrowing rule applied to the raw 64-bit value afterwards. Encoders
//! are the inverse widening followed by `varint::encode`; they trust their
//! input, since every in-range value of these Rust types is encodable.

use crate::error::WireError;
use crate::kernels::{varint, zigzag};
use crate::types::DecodeResult;

//==================================================================================
// 1. Shared Decode Strategy
//==================================================================================

/// Decodes a varint at `pos`, then applies the type-specific `narrow` rule.
///
/// A varint failure short-circuits before `narrow` runs.
#[inline]
pub fn decode_narrowed<T, F>(buffer: &[u8], pos: usize, narrow: F) -> DecodeResult<T>
where
    F: FnOnce(u64) -> Result<T, WireError>,
{
    varint::decode(buffer, pos)?.try_map(narrow)
}

/// Narrows a two's-complement 64-bit value to 32 bits, requiring the high 32
/// bits to be the sign extension of the low 32.
#[inline]
fn narrow_sign_extended_i32(wide: i64, raw: u64, target: &'static str) -> Result<i32, WireError> {
    i32::try_from(wide).map_err(|_| WireError::RangeViolation { value: raw, target })
}

//==================================================================================
// 2. Decoders
//==================================================================================

pub fn decode_uint64(buffer: &[u8], pos: usize) -> DecodeResult<u64> {
    varint::decode(buffer, pos)
}

pub fn decode_uint32(buffer: &[u8], pos: usize) -> DecodeResult<u32> {
    decode_narrowed(buffer, pos, |raw| {
        u32::try_from(raw).map_err(|_| WireError::RangeViolation {
            value: raw,
            target: "uint32",
        })
    })
}

pub fn decode_int64(buffer: &[u8], pos: usize) -> DecodeResult<i64> {
    decode_narrowed(buffer, pos, |raw| Ok(raw as i64))
}

pub fn decode_int32(buffer: &[u8], pos: usize) -> DecodeResult<i32> {
    decode_narrowed(buffer, pos, |raw| narrow_sign_extended_i32(raw as i64, raw, "int32"))
}

pub fn decode_sint64(buffer: &[u8], pos: usize) -> DecodeResult<i64> {
    decode_narrowed(buffer, pos, |raw| Ok(zigzag::decode_val(raw)))
}

/// Zig-zag decodes the full 64-bit value, then applies the int32 sign-extension
/// check to the result. This rejects any raw value above `u32::MAX`.
pub fn decode_sint32(buffer: &[u8], pos: usize) -> DecodeResult<i32> {
    decode_narrowed(buffer, pos, |raw| {
        narrow_sign_extended_i32(zigzag::decode_val(raw), raw, "sint32")
    })
}

pub fn decode_bool(buffer: &[u8], pos: usize) -> DecodeResult<bool> {
    decode_narrowed(buffer, pos, |raw| match raw {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(WireError::InvalidDiscriminant {
            kind: "bool",
            value: other,
        }),
    })
}

/// Enums travel as int32.
pub fn decode_enum(buffer: &[u8], pos: usize) -> DecodeResult<i32> {
    decode_narrowed(buffer, pos, |raw| narrow_sign_extended_i32(raw as i64, raw, "enum"))
}

//==================================================================================
// 3. Encoders
//==================================================================================

pub fn encode_uint64(value: u64) -> Vec<u8> {
    varint::encode(value)
}

pub fn encode_uint32(value: u32) -> Vec<u8> {
    varint::encode(u64::from(value))
}

pub fn encode_int64(value: i64) -> Vec<u8> {
    varint::encode(value as u64)
}

/// Negative values are sign-extended to 64 bits, so they always take 10 bytes.
pub fn encode_int32(value: i32) -> Vec<u8> {
    encode_int64(i64::from(value))
}

pub fn encode_sint64(value: i64) -> Vec<u8> {
    varint::encode(zigzag::encode_val(value))
}

pub fn encode_sint32(value: i32) -> Vec<u8> {
    varint::encode(u64::from(zigzag::encode_val(value)))
}

pub fn encode_bool(value: bool) -> Vec<u8> {
    varint::encode(u64::from(value))
}

pub fn encode_enum(value: i32) -> Vec<u8> {
    encode_int32(value)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Decoded;

    #[test]
    fn test_int32_roundtrip_extremes() {
        for v in [0, 1, -1, 300, -300, i32::MAX, i32::MIN] {
            let encoded = encode_int32(v);
            assert_eq!(decode_int32(&encoded, 0).unwrap(), Decoded::new(encoded.len(), v));
        }
        assert_eq!(encode_int32(-1).len(), 10);
    }

    #[test]
    fn test_int32_rejects_inconsistent_high_bits() {
        // 2^32: low 32 bits zero, high bits nonzero.
        let encoded = varint::encode(1 << 32);
        assert!(matches!(
            decode_int32(&encoded, 0),
            Err(WireError::RangeViolation { target: "int32", .. })
        ));
        // i32::MAX + 1 as a positive 64-bit value.
        let encoded = varint::encode(0x8000_0000);
        assert!(decode_int32(&encoded, 0).is_err());
        // A negative i64 outside i32 range.
        let encoded = encode_int64(i64::from(i32::MIN) - 1);
        assert!(decode_int32(&encoded, 0).is_err());
    }

    #[test]
    fn test_uint32_range() {
        let encoded = encode_uint32(u32::MAX);
        assert_eq!(decode_uint32(&encoded, 0).unwrap().value, u32::MAX);

        let encoded = varint::encode(u64::from(u32::MAX) + 1);
        assert_eq!(
            decode_uint32(&encoded, 0),
            Err(WireError::RangeViolation {
                value: 1 << 32,
                target: "uint32"
            })
        );
    }

    #[test]
    fn test_int64_and_uint64_extremes() {
        for v in [i64::MIN, -1, 0, i64::MAX] {
            let encoded = encode_int64(v);
            assert_eq!(decode_int64(&encoded, 0).unwrap().value, v);
        }
        let encoded = encode_uint64(u64::MAX);
        assert_eq!(decode_uint64(&encoded, 0).unwrap(), Decoded::new(10, u64::MAX));
    }

    #[test]
    fn test_sint_known_encodings() {
        assert_eq!(encode_sint32(-1), vec![0x01]);
        assert_eq!(encode_sint32(1), vec![0x02]);
        assert_eq!(encode_sint64(-64), vec![0x7F]);
        assert_eq!(encode_sint32(i32::MIN), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert_eq!(decode_sint32(&[0x03], 0).unwrap().value, -2);
        assert_eq!(decode_sint64(&encode_sint64(i64::MIN), 0).unwrap().value, i64::MIN);
    }

    #[test]
    fn test_sint32_rejects_wide_values() {
        // Raw 2^32 zig-zag decodes to 2^31, which is not an int32.
        let encoded = varint::encode(1 << 32);
        assert!(matches!(
            decode_sint32(&encoded, 0),
            Err(WireError::RangeViolation { target: "sint32", .. })
        ));
        // Raw u32::MAX is i32::MIN and is accepted.
        let encoded = varint::encode(u64::from(u32::MAX));
        assert_eq!(decode_sint32(&encoded, 0).unwrap().value, i32::MIN);
    }

    #[test]
    fn test_bool_strictness() {
        assert_eq!(decode_bool(&[0x00], 0).unwrap(), Decoded::new(1, false));
        assert_eq!(decode_bool(&[0x01], 0).unwrap(), Decoded::new(1, true));
        assert_eq!(
            decode_bool(&[0x02], 0),
            Err(WireError::InvalidDiscriminant {
                kind: "bool",
                value: 2
            })
        );
        assert_eq!(encode_bool(true), vec![0x01]);
        assert_eq!(encode_bool(false), vec![0x00]);
    }

    #[test]
    fn test_enum_matches_int32() {
        assert_eq!(encode_enum(3), vec![0x03]);
        assert_eq!(encode_enum(-5), encode_int32(-5));
        assert_eq!(decode_enum(&[0x08, 0x01, 0x10, 0x03], 3).unwrap(), Decoded::new(4, 3));
        assert!(decode_enum(&varint::encode(1 << 32), 0).is_err());
    }

    #[test]
    fn test_varint_failure_precedes_narrowing() {
        let encoded = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF1];
        assert_eq!(decode_int32(&encoded, 0), Err(WireError::MalformedVarint(0)));
        assert_eq!(decode_uint32(&encoded, 0), Err(WireError::MalformedVarint(0)));
        assert_eq!(decode_sint64(&encoded, 0), Err(WireError::MalformedVarint(0)));
        assert_eq!(decode_bool(&encoded, 0), Err(WireError::MalformedVarint(0)));
    }
}
