//! Request/response value shapes returned by the decode kernels.
//!
//! Positions are explicit values threaded through every call; nothing here is
//! a cursor and nothing holds a reference to the buffer it was decoded from.

use crate::error::WireError;
use crate::types::WireType;

/// A successful decode: the value, and the offset one past the last byte consumed.
///
/// Every successful decode consumes at least one byte, so `new_position` is
/// always strictly greater than the position the decode started at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<T> {
    pub new_position: usize,
    pub value: T,
}

impl<T> Decoded<T> {
    pub fn new(new_position: usize, value: T) -> Self {
        Self {
            new_position,
            value,
        }
    }

    /// Applies a fallible narrowing to the value, keeping the position.
    pub fn try_map<U, F>(self, narrow: F) -> Result<Decoded<U>, WireError>
    where
        F: FnOnce(T) -> Result<U, WireError>,
    {
        Ok(Decoded {
            new_position: self.new_position,
            value: narrow(self.value)?,
        })
    }
}

/// The tagged outcome of every decode operation.
pub type DecodeResult<T> = Result<Decoded<T>, WireError>;

/// A decoded field key (tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    /// Always at least 1.
    pub field_number: u64,
    pub wire_type: WireType,
}

impl Key {
    pub fn new(field_number: u64, wire_type: WireType) -> Self {
        Self {
            field_number,
            wire_type,
        }
    }

    /// The raw varint value this key encodes to: `(field_number << 3) | wire_type`.
    pub fn to_raw(&self) -> u64 {
        (self.field_number << 3) | self.wire_type.as_u64()
    }
}

/// The validated bounds of a length-delimited payload.
///
/// `new_position` is the offset right after the length prefix, where the
/// payload starts. `new_position + length` is guaranteed not to exceed the
/// buffer the span was decoded from. The payload itself is never copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthDelimitedSpan {
    pub new_position: usize,
    pub length: usize,
}

impl LengthDelimitedSpan {
    /// The offset one past the last payload byte.
    pub fn end(&self) -> usize {
        // Validated against the buffer length at decode time, so this cannot overflow.
        self.new_position + self.length
    }

    /// Borrows the payload out of the buffer the span was decoded from.
    ///
    /// Returns `OutOfBounds` if called with a shorter buffer than the one that
    /// was validated.
    pub fn payload<'a>(&self, buffer: &'a [u8]) -> Result<&'a [u8], WireError> {
        buffer
            .get(self.new_position..self.end())
            .ok_or_else(|| WireError::out_of_bounds(self.end(), buffer))
    }
}
