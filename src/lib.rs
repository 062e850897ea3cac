//! This file is the root of the `canonpb` Rust crate.
//!
//! `canonpb` is a strict, canonical-only codec for the Protocol Buffers wire
//! format. Decoders reject every encoding that is not the unique shortest form
//! of its value; encoders only ever produce that form.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`kernels`, `bridge`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python (`python` feature only).

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod types;

mod traits;

#[cfg(feature = "python")]
mod ffi;

pub use config::CodecConfig;
pub use error::WireError;

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `canonpb` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn canonpb(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use ffi::python as py_api;

    // --- Primitives ---
    m.add_function(wrap_pyfunction!(py_api::decode_varint_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_varint_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_key_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_key_py, m)?)?;

    // --- Varint scalars ---
    m.add_function(wrap_pyfunction!(py_api::decode_int32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_uint32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_int64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_uint64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_sint32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_sint64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_bool_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_enum_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_int32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_uint32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_int64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_uint64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_sint32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_sint64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_bool_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_enum_py, m)?)?;

    // --- Fixed-width ---
    m.add_function(wrap_pyfunction!(py_api::decode_bits32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_fixed32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_sfixed32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_bits64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_fixed64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_sfixed64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_bits32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_fixed32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_sfixed32_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_bits64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_fixed64_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_sfixed64_py, m)?)?;

    // --- Length-delimited ---
    m.add_function(wrap_pyfunction!(py_api::decode_length_delimited_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_string_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_bytes_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_embedded_message_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::decode_packed_repeated_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_length_delimited_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_string_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_bytes_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_embedded_message_py, m)?)?;
    m.add_function(wrap_pyfunction!(py_api::encode_packed_repeated_py, m)?)?;

    // --- Expose the error type used for invalid arguments ---
    m.add(
        "CanonPbError",
        m.py().get_type_bound::<pyo3::exceptions::PyValueError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on logging of rejected decodes ---
    m.add_function(wrap_pyfunction!(py_api::enable_verbose_logging_py, m)?)?;

    Ok(())
}
