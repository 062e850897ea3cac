//! This module defines the canonical, type-safe representation of the protobuf
//! field types the codec knows how to decode and encode.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::WireType;

/// A declared protobuf field type.
///
/// This is schema-level information: it is never read off the wire. It lets a
/// caller derive the key it expects to see before decoding a field's payload.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Bool,
    Enum,
    Fixed32,
    SFixed32,
    Fixed64,
    SFixed64,
    String,
    Bytes,
    Message,
}

impl FieldType {
    /// The wire type a single, unpacked value of this field type uses.
    pub fn wire_type(&self) -> WireType {
        match self {
            Self::Int32
            | Self::Int64
            | Self::UInt32
            | Self::UInt64
            | Self::SInt32
            | Self::SInt64
            | Self::Bool
            | Self::Enum => WireType::Varint,
            Self::Fixed64 | Self::SFixed64 => WireType::Fixed64,
            Self::Fixed32 | Self::SFixed32 => WireType::Fixed32,
            Self::String | Self::Bytes | Self::Message => WireType::LengthDelimited,
        }
    }

    /// Returns `true` if a repeated field of this type may use packed encoding.
    pub fn is_packable(&self) -> bool {
        !matches!(self, Self::String | Self::Bytes | Self::Message)
    }

    /// The wire type of a repeated field of this type when packed, or `None`
    /// if the type cannot be packed.
    pub fn packed_wire_type(&self) -> Option<WireType> {
        self.is_packable().then_some(WireType::LengthDelimited)
    }
}

/// Provides the protobuf-language name of the field type (e.g. `sfixed32`).
impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::SInt32 => "sint32",
            Self::SInt64 => "sint64",
            Self::Bool => "bool",
            Self::Enum => "enum",
            Self::Fixed32 => "fixed32",
            Self::SFixed32 => "sfixed32",
            Self::Fixed64 => "fixed64",
            Self::SFixed64 => "sfixed64",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}
