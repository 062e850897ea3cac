//! This module serves as the home of all pure, stateless wire-format kernels.
//!
//! Each layer builds only on the layers above it in this list. Every kernel is
//! a free function of its explicit inputs: decoders take `(buffer, position)`
//! and return a `DecodeResult`, encoders take a typed value and return the
//! freshly produced payload bytes (keys are emitted separately via `key`).

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Layer 1: Base-128 varint primitive
pub mod varint;
pub mod zigzag;

/// Layer 2: Field keys
pub mod key;

/// Layer 3: Varint scalars (int32 ... enum)
pub mod scalar;

/// Layer 4: Fixed-width values (independent of the varint primitive)
pub mod fixed;

/// Layer 5: Length-delimited payloads
pub mod length_delimited;

/// Composite helpers over length-delimited payloads
pub mod embedded;
pub mod packed;
