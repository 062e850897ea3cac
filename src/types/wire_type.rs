//! The 3-bit physical encoding discriminant carried in every field key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WireError;

/// The wire types this codec accepts.
///
/// Start-group (3) and end-group (4) are syntactically representable in a key
/// but are deliberately not variants here: decoding them is a failure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    Fixed32 = 5,
}

impl WireType {
    /// The low three bits this wire type occupies in an encoded key.
    pub fn as_u64(self) -> u64 {
        self as u64
    }
}

impl TryFrom<u64> for WireType {
    type Error = WireError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Varint),
            1 => Ok(Self::Fixed64),
            2 => Ok(Self::LengthDelimited),
            5 => Ok(Self::Fixed32),
            // 3 and 4 are the deprecated group markers.
            other => Err(WireError::InvalidDiscriminant {
                kind: "wire type",
                value: other,
            }),
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Varint => "varint",
            Self::Fixed64 => "64-bit",
            Self::LengthDelimited => "length-delimited",
            Self::Fixed32 => "32-bit",
        };
        write!(f, "{} ({})", name, self.as_u64())
    }
}
