//! This module contains the pure, stateless kernels for Zig-zag encoding and
//! decoding, the signed-to-unsigned mapping behind `sint32` and `sint64`.
//!
//! It is a lossless, bitwise bijection that keeps small-magnitude values small:
//! 0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ... This module is panic-free.

use num_traits::{PrimInt, Signed, Unsigned};

use crate::traits::{HasSigned, HasUnsigned};

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Encodes a single signed integer using the Zig-zag algorithm.
#[inline]
pub fn encode_val<T>(n: T) -> T::Unsigned
where
    T: PrimInt + Signed + HasUnsigned,
{
    let bits = T::zero().count_zeros() as usize;
    // (n << 1) ^ (n >> (BITS - 1)); the right shift on a signed type is arithmetic.
    ((n << 1) ^ (n >> (bits - 1))).to_unsigned_bits()
}

/// Decodes a single unsigned integer back to its signed representation.
#[inline]
pub fn decode_val<U>(n: U) -> U::Signed
where
    U: PrimInt + Unsigned + HasSigned,
    U::Signed: PrimInt + Signed,
{
    // (n >> 1) ^ -(n & 1)
    let shifted = (n >> 1).to_signed_bits();
    let lsb = (n & U::one()).to_signed_bits();
    shifted ^ (-lsb)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_core_logic_i32() {
        assert_eq!(encode_val(0i32), 0u32);
        assert_eq!(encode_val(-1i32), 1u32);
        assert_eq!(encode_val(1i32), 2u32);
        assert_eq!(encode_val(-2i32), 3u32);

        assert_eq!(decode_val(0u32), 0i32);
        assert_eq!(decode_val(1u32), -1i32);
        assert_eq!(decode_val(2u32), 1i32);
        assert_eq!(decode_val(3u32), -2i32);
    }

    #[test]
    fn test_max_min_values_i32() {
        assert_eq!(encode_val(i32::MAX), u32::MAX - 1);
        assert_eq!(encode_val(i32::MIN), u32::MAX);
        assert_eq!(decode_val(u32::MAX - 1), i32::MAX);
        assert_eq!(decode_val(u32::MAX), i32::MIN);
    }

    #[test]
    fn test_max_min_values_i64() {
        for original in [i64::MAX, i64::MIN, -1, 0, 1, -300, 300] {
            assert_eq!(decode_val(encode_val(original)), original);
        }
        assert_eq!(encode_val(i64::MIN), u64::MAX);
    }
}
