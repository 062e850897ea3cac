// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the host-facing API of the canonpb library. It exposes one decode
// and one encode entry point per wire concept with the exact shapes the metered host
// calls: decoders take `(pos, buffer)` and return a flat `(success, new_pos, value...)`
// tuple; encoders take a typed value and return the payload bytes.
//
// Data Flow (Decode):
//
//   1. [Host / FFI]             -> decode_int32(pos, buffer)
//         |
//         `-> calls the pure kernel with (buffer, pos)
//
//   2. [kernels::scalar]        -> Returns `DecodeResult<i32>`
//         |
//         `-> Err(WireError) is logged (debug builds) and collapsed to
//             (false, pos, 0); Ok(Decoded) becomes (true, new_position, value)
//
// Data Flow (Encode):
//
//   1. [Host / FFI]             -> encode_int32(value)
//   2. [kernels::scalar]        -> Returns `Vec<u8>` (payload only, no key)
//
// Rust callers that want the failure reason should call `kernels` directly.
// ====================================================================================
pub mod stateless_api;

pub use stateless_api::*;
