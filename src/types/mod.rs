//! This module defines the core, strongly-typed value shapes used throughout
//! the canonpb codec.
//!
//! It includes the `WireType` discriminant, the protobuf `FieldType` enum, and
//! the request/response shapes (`Key`, `Decoded<T>`, `LengthDelimitedSpan`)
//! every kernel returns. None of these outlive a single codec call.

pub mod decoded;
pub mod field_type;
pub mod wire_type;

// Re-export the main types for easier access.
pub use decoded::{DecodeResult, Decoded, Key, LengthDelimitedSpan};
pub use field_type::FieldType;
pub use wire_type::WireType;
