//! This module contains the pure, stateless kernels for the fixed-width wire
//! types: wire type 5 (4 bytes) and wire type 1 (8 bytes).
//!
//! Values are read and written as little-endian bit patterns with no framing.
//! The only way a fixed-width decode can fail is a short buffer. The module
//! relies on `bytemuck` for the byte <-> integer reinterpretation and on
//! `num_traits` for the endianness conversion, and is panic-free.

use bytemuck::Pod;
use num_traits::PrimInt;

use crate::error::WireError;
use crate::types::{DecodeResult, Decoded};

//==================================================================================
// 1. Private Core Logic
//==================================================================================

/// Reads `size_of::<T>()` little-endian bytes starting at `pos`.
fn read_le<T>(buffer: &[u8], pos: usize) -> DecodeResult<T>
where
    T: PrimInt + Pod,
{
    let width = std::mem::size_of::<T>();
    let end = pos
        .checked_add(width)
        .filter(|&end| end <= buffer.len())
        .ok_or_else(|| WireError::out_of_bounds(pos, buffer))?;

    // The slice is exactly `width` bytes long, as `pod_read_unaligned` requires.
    let raw: T = bytemuck::pod_read_unaligned(&buffer[pos..end]);
    Ok(Decoded::new(end, T::from_le(raw)))
}

/// Writes the little-endian bit pattern of `value`.
fn write_le<T>(value: T) -> Vec<u8>
where
    T: PrimInt + Pod,
{
    bytemuck::bytes_of(&value.to_le()).to_vec()
}

//==================================================================================
// 2. Public API: 32-bit (wire type 5)
//==================================================================================

pub fn decode_bits32(buffer: &[u8], pos: usize) -> DecodeResult<u32> {
    read_le::<u32>(buffer, pos)
}

/// Identical to `decode_bits32`; named after the protobuf field type.
pub fn decode_fixed32(buffer: &[u8], pos: usize) -> DecodeResult<u32> {
    decode_bits32(buffer, pos)
}

pub fn decode_sfixed32(buffer: &[u8], pos: usize) -> DecodeResult<i32> {
    read_le::<i32>(buffer, pos)
}

pub fn encode_bits32(value: u32) -> Vec<u8> {
    write_le(value)
}

pub fn encode_fixed32(value: u32) -> Vec<u8> {
    encode_bits32(value)
}

pub fn encode_sfixed32(value: i32) -> Vec<u8> {
    write_le(value)
}

//==================================================================================
// 3. Public API: 64-bit (wire type 1)
//==================================================================================

pub fn decode_bits64(buffer: &[u8], pos: usize) -> DecodeResult<u64> {
    read_le::<u64>(buffer, pos)
}

/// Identical to `decode_bits64`; named after the protobuf field type.
pub fn decode_fixed64(buffer: &[u8], pos: usize) -> DecodeResult<u64> {
    decode_bits64(buffer, pos)
}

pub fn decode_sfixed64(buffer: &[u8], pos: usize) -> DecodeResult<i64> {
    read_le::<i64>(buffer, pos)
}

pub fn encode_bits64(value: u64) -> Vec<u8> {
    write_le(value)
}

pub fn encode_fixed64(value: u64) -> Vec<u8> {
    encode_bits64(value)
}

pub fn encode_sfixed64(value: i64) -> Vec<u8> {
    write_le(value)
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
