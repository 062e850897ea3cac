// In: src/error.rs

//! This module defines the single, unified error type for the entire canonpb library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every decode kernel reports failure through this enum instead of panicking.
//! The flat `bridge` API collapses it into the `(false, position, default)`
//! triple expected by the host; Rust callers keep the full diagnostic.

use thiserror::Error;

use crate::types::WireType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    // =========================================================================
    // === Wire-Format Violations (the decode taxonomy)
    // =========================================================================
    /// A read would extend past the end of the buffer.
    #[error("Read out of bounds at position {position} (buffer length {buffer_len})")]
    OutOfBounds { position: usize, buffer_len: usize },

    /// The continuation chain exceeds 10 bytes, or payload bits land beyond bit 63.
    #[error("Malformed varint starting at position {0}: more than 64 bits of payload")]
    MalformedVarint(usize),

    /// A varint is decodable but not minimal (it ends in a zero continuation group).
    #[error("Non-canonical varint starting at position {0}: trailing zero group")]
    NonCanonicalEncoding(usize),

    /// The decoded value does not fit the declared field type.
    #[error("Value {value:#x} is out of range for {target}")]
    RangeViolation { value: u64, target: &'static str },

    /// A discriminant (wire type, bool, field number) holds a value outside its domain.
    #[error("Invalid {kind}: {value}")]
    InvalidDiscriminant { kind: &'static str, value: u64 },

    /// A length prefix, added to its position, exceeds the buffer or overflows.
    #[error(
        "Length-delimited payload of {length} bytes at position {position} exceeds buffer length {buffer_len}"
    )]
    LengthOverflow {
        position: usize,
        length: u64,
        buffer_len: usize,
    },

    // =========================================================================
    // === Caller-Contract Errors (supplemental helpers)
    // =========================================================================
    #[error(
        "Unexpected key: expected field {expected_field} ({expected_wire_type}), found field {found_field} ({found_wire_type})"
    )]
    UnexpectedKey {
        expected_field: u64,
        expected_wire_type: WireType,
        found_field: u64,
        found_wire_type: WireType,
    },

    #[error("Packed field exceeds the limit of {0} elements")]
    PackedElementLimit(usize),

    #[error("Embedded message nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),

    #[error("Invalid codec configuration: {0}")]
    Config(String), // serde_json::Error is neither Clone nor PartialEq, so we keep the message.
}

impl WireError {
    /// Builds an `OutOfBounds` error for a read at `position` in `buffer`.
    pub(crate) fn out_of_bounds(position: usize, buffer: &[u8]) -> Self {
        WireError::OutOfBounds {
            position,
            buffer_len: buffer.len(),
        }
    }

    /// A short, stable name for the failure class. Used in structured log records.
    pub fn kind(&self) -> &'static str {
        match self {
            WireError::OutOfBounds { .. } => "out_of_bounds",
            WireError::MalformedVarint(_) => "malformed_varint",
            WireError::NonCanonicalEncoding(_) => "non_canonical_encoding",
            WireError::RangeViolation { .. } => "range_violation",
            WireError::InvalidDiscriminant { .. } => "invalid_discriminant",
            WireError::LengthOverflow { .. } => "length_overflow",
            WireError::UnexpectedKey { .. } => "unexpected_key",
            WireError::PackedElementLimit(_) => "packed_element_limit",
            WireError::NestingTooDeep(_) => "nesting_too_deep",
            WireError::Config(_) => "config",
        }
    }
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<serde_json::Error> for WireError {
    fn from(err: serde_json::Error) -> Self {
        WireError::Config(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<WireError> for pyo3::PyErr {
    fn from(err: WireError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
