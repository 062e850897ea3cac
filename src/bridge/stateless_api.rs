// In: src/bridge/stateless_api.rs

//! The flat, host-shaped codec API.
//!
//! Every decoder is `decode_<type>(pos, buffer) -> (success, new_pos, value)`;
//! on failure `success` is `false`, `new_pos` is the input position and the
//! value is the type's zero. Encoders return only the value's payload bytes;
//! the caller emits the key separately with `encode_key`.

use crate::error::WireError;
use crate::kernels::{fixed, key, length_delimited, scalar, varint};
use crate::types::{DecodeResult, LengthDelimitedSpan, WireType};

//==================================================================================
// 1. Result Flattening
//==================================================================================

/// Logs a rejected decode as a structured metric record (debug builds only).
#[cfg_attr(not(debug_assertions), allow(unused_variables))]
fn report_rejection(op: &'static str, pos: usize, err: &WireError) {
    log_metric!(
        "event" = "decode_rejected",
        "op" = op,
        "position" = pos,
        "reason" = err.kind(),
        "detail" = err
    );
}

fn flatten<T: Default>(op: &'static str, pos: usize, result: DecodeResult<T>) -> (bool, usize, T) {
    match result {
        Ok(decoded) => (true, decoded.new_position, decoded.value),
        Err(err) => {
            report_rejection(op, pos, &err);
            (false, pos, T::default())
        }
    }
}

fn flatten_span(
    op: &'static str,
    pos: usize,
    result: Result<LengthDelimitedSpan, WireError>,
) -> (bool, usize, usize) {
    match result {
        Ok(span) => (true, span.new_position, span.length),
        Err(err) => {
            report_rejection(op, pos, &err);
            (false, pos, 0)
        }
    }
}

macro_rules! bridge_decoder {
    ($($name:ident => $kernel:path, $ty:ty;)+) => {
        $(
            pub fn $name(pos: usize, buffer: &[u8]) -> (bool, usize, $ty) {
                flatten(stringify!($name), pos, $kernel(buffer, pos))
            }
        )+
    };
}

macro_rules! bridge_span_decoder {
    ($($name:ident => $kernel:path;)+) => {
        $(
            /// Returns `(success, position after the length prefix, payload length)`.
            pub fn $name(pos: usize, buffer: &[u8]) -> (bool, usize, usize) {
                flatten_span(stringify!($name), pos, $kernel(buffer, pos))
            }
        )+
    };
}

//==================================================================================
// 2. Decoders
//==================================================================================

bridge_decoder! {
    decode_varint => varint::decode, u64;

    decode_int32 => scalar::decode_int32, i32;
    decode_uint32 => scalar::decode_uint32, u32;
    decode_int64 => scalar::decode_int64, i64;
    decode_uint64 => scalar::decode_uint64, u64;
    decode_sint32 => scalar::decode_sint32, i32;
    decode_sint64 => scalar::decode_sint64, i64;
    decode_bool => scalar::decode_bool, bool;
    decode_enum => scalar::decode_enum, i32;

    decode_bits32 => fixed::decode_bits32, u32;
    decode_fixed32 => fixed::decode_fixed32, u32;
    decode_sfixed32 => fixed::decode_sfixed32, i32;
    decode_bits64 => fixed::decode_bits64, u64;
    decode_fixed64 => fixed::decode_fixed64, u64;
    decode_sfixed64 => fixed::decode_sfixed64, i64;
}

bridge_span_decoder! {
    decode_length_delimited => length_delimited::decode;
    decode_string => length_delimited::decode_string;
    decode_bytes => length_delimited::decode_bytes;
    decode_embedded_message => length_delimited::decode_embedded_message;
    decode_packed_repeated => length_delimited::decode_packed_repeated;
}

/// Returns `(success, new_pos, field_number, wire_type)`.
pub fn decode_key(pos: usize, buffer: &[u8]) -> (bool, usize, u64, u64) {
    match key::decode(buffer, pos) {
        Ok(decoded) => (
            true,
            decoded.new_position,
            decoded.value.field_number,
            decoded.value.wire_type.as_u64(),
        ),
        Err(err) => {
            report_rejection("decode_key", pos, &err);
            (false, pos, 0, 0)
        }
    }
}

//==================================================================================
// 3. Encoders
//==================================================================================

pub use crate::kernels::fixed::{
    encode_bits32, encode_bits64, encode_fixed32, encode_fixed64, encode_sfixed32, encode_sfixed64,
};
pub use crate::kernels::length_delimited::{
    encode as encode_length_delimited, encode_bytes, encode_embedded_message,
    encode_packed_repeated, encode_string,
};
pub use crate::kernels::scalar::{
    encode_bool, encode_enum, encode_int32, encode_int64, encode_sint32, encode_sint64,
    encode_uint32, encode_uint64,
};
pub use crate::kernels::varint::encode as encode_varint;

/// Encodes a field key. `field_number` must be at least 1.
pub fn encode_key(field_number: u64, wire_type: WireType) -> Vec<u8> {
    key::encode(field_number, wire_type)
}
