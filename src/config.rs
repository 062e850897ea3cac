// In: src/config.rs

//! The single source of truth for canonpb's tunable limits.
//!
//! The wire primitives themselves take no configuration: they are pure
//! functions of `(buffer, position)` and their bounds are fixed by the format
//! (10 bytes per varint, 4 or 8 bytes per fixed-width value). The limits here
//! bound the *composite* helpers, where the iteration count depends on input:
//! packed-repeated element walks and embedded-message descent.
//!
//! A `CodecConfig` is created once at the application boundary (e.g., from a
//! JSON document or Python keyword arguments) and passed down by reference.

use serde::{Deserialize, Serialize};

use crate::error::WireError;

/// Limits applied by the packed and embedded helpers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    /// Upper bound on the number of elements decoded from one packed-repeated payload.
    #[serde(default = "default_max_packed_elements")]
    pub max_packed_elements: usize,

    /// Upper bound on the embedded-message depth a caller may descend to.
    /// Entering a frame at `depth >= max_nesting_depth` fails.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

// Default implementation to make constructing the config easier.
impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_packed_elements: default_max_packed_elements(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

impl CodecConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration back to JSON.
    pub fn to_json_string(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Helper for `serde` to provide a default for `max_packed_elements`.
fn default_max_packed_elements() -> usize {
    65_536
}

/// Helper for `serde` to provide a default for `max_nesting_depth`.
fn default_max_nesting_depth() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = CodecConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.max_packed_elements, 65_536);
        assert_eq!(config.max_nesting_depth, 100);
    }

    #[test]
    fn test_partial_override() {
        let config = CodecConfig::from_json_str(r#"{"max_nesting_depth": 8}"#).unwrap();
        assert_eq!(config.max_nesting_depth, 8);
        assert_eq!(config.max_packed_elements, 65_536);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = CodecConfig {
            max_packed_elements: 16,
            max_nesting_depth: 4,
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(CodecConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = CodecConfig::from_json_str(r#"{"max_nesting_depth": "deep"}"#);
        assert!(matches!(result, Err(WireError::Config(_))));
    }
}
