// In: src/ffi/python.rs

//! Python bindings for the flat codec API.
//!
//! Every binding forwards to `crate::bridge` unchanged, so Python sees exactly
//! the same `(success, new_pos, value)` tuples as Rust callers. Encoders hand
//! back `bytes`.

use log::LevelFilter;
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use std::fs::OpenOptions;
use std::sync::Once;

use crate::bridge;
use crate::types::WireType;

//==================================================================================
// I. Decoders
//==================================================================================

macro_rules! py_decoder {
    ($($py_fn:ident => $name:tt, $bridge_fn:path, $ty:ty;)+) => {
        $(
            #[pyfunction]
            #[pyo3(name = $name)]
            pub fn $py_fn(pos: usize, buffer: &[u8]) -> (bool, usize, $ty) {
                $bridge_fn(pos, buffer)
            }
        )+
    };
}

py_decoder! {
    decode_varint_py => "decode_varint", bridge::decode_varint, u64;

    decode_int32_py => "decode_int32", bridge::decode_int32, i32;
    decode_uint32_py => "decode_uint32", bridge::decode_uint32, u32;
    decode_int64_py => "decode_int64", bridge::decode_int64, i64;
    decode_uint64_py => "decode_uint64", bridge::decode_uint64, u64;
    decode_sint32_py => "decode_sint32", bridge::decode_sint32, i32;
    decode_sint64_py => "decode_sint64", bridge::decode_sint64, i64;
    decode_bool_py => "decode_bool", bridge::decode_bool, bool;
    decode_enum_py => "decode_enum", bridge::decode_enum, i32;

    decode_bits32_py => "decode_bits32", bridge::decode_bits32, u32;
    decode_fixed32_py => "decode_fixed32", bridge::decode_fixed32, u32;
    decode_sfixed32_py => "decode_sfixed32", bridge::decode_sfixed32, i32;
    decode_bits64_py => "decode_bits64", bridge::decode_bits64, u64;
    decode_fixed64_py => "decode_fixed64", bridge::decode_fixed64, u64;
    decode_sfixed64_py => "decode_sfixed64", bridge::decode_sfixed64, i64;

    decode_length_delimited_py => "decode_length_delimited", bridge::decode_length_delimited, usize;
    decode_string_py => "decode_string", bridge::decode_string, usize;
    decode_bytes_py => "decode_bytes", bridge::decode_bytes, usize;
    decode_embedded_message_py => "decode_embedded_message", bridge::decode_embedded_message, usize;
    decode_packed_repeated_py => "decode_packed_repeated", bridge::decode_packed_repeated, usize;
}

/// Returns `(success, new_pos, field_number, wire_type)`.
#[pyfunction]
#[pyo3(name = "decode_key")]
pub fn decode_key_py(pos: usize, buffer: &[u8]) -> (bool, usize, u64, u64) {
    bridge::decode_key(pos, buffer)
}

//==================================================================================
// II. Encoders
//==================================================================================

macro_rules! py_encoder {
    ($($py_fn:ident => $name:tt, $bridge_fn:path, $arg:ty;)+) => {
        $(
            #[pyfunction]
            #[pyo3(name = $name)]
            pub fn $py_fn(py: Python<'_>, value: $arg) -> Py<PyBytes> {
                PyBytes::new_bound(py, &$bridge_fn(value)).unbind()
            }
        )+
    };
}

py_encoder! {
    encode_varint_py => "encode_varint", bridge::encode_varint, u64;

    encode_int32_py => "encode_int32", bridge::encode_int32, i32;
    encode_uint32_py => "encode_uint32", bridge::encode_uint32, u32;
    encode_int64_py => "encode_int64", bridge::encode_int64, i64;
    encode_uint64_py => "encode_uint64", bridge::encode_uint64, u64;
    encode_sint32_py => "encode_sint32", bridge::encode_sint32, i32;
    encode_sint64_py => "encode_sint64", bridge::encode_sint64, i64;
    encode_bool_py => "encode_bool", bridge::encode_bool, bool;
    encode_enum_py => "encode_enum", bridge::encode_enum, i32;

    encode_bits32_py => "encode_bits32", bridge::encode_bits32, u32;
    encode_fixed32_py => "encode_fixed32", bridge::encode_fixed32, u32;
    encode_sfixed32_py => "encode_sfixed32", bridge::encode_sfixed32, i32;
    encode_bits64_py => "encode_bits64", bridge::encode_bits64, u64;
    encode_fixed64_py => "encode_fixed64", bridge::encode_fixed64, u64;
    encode_sfixed64_py => "encode_sfixed64", bridge::encode_sfixed64, i64;

    encode_length_delimited_py => "encode_length_delimited", bridge::encode_length_delimited, &[u8];
    encode_string_py => "encode_string", bridge::encode_string, &str;
    encode_bytes_py => "encode_bytes", bridge::encode_bytes, &[u8];
    encode_embedded_message_py => "encode_embedded_message", bridge::encode_embedded_message, &[u8];
    encode_packed_repeated_py => "encode_packed_repeated", bridge::encode_packed_repeated, &[u8];
}

/// Encodes a field key. Raises `ValueError` for an unsupported wire type or field 0.
#[pyfunction]
#[pyo3(name = "encode_key")]
pub fn encode_key_py(py: Python<'_>, field_number: u64, wire_type: u64) -> PyResult<Py<PyBytes>> {
    let wire_type = WireType::try_from(wire_type)?;
    if field_number == 0 {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
            "field_number must be at least 1",
        ));
    }
    let encoded = bridge::encode_key(field_number, wire_type);
    Ok(PyBytes::new_bound(py, &encoded).unbind())
}

//==================================================================================
// III. Diagnostics
//==================================================================================

static INIT_LOGGER: Once = Once::new();

/// Routes `log` output (including rejected-decode metrics in debug builds) to
/// stderr, or appends it to `log_file` when one is given.
#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    let mut open_error = None;
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(&filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(err) => {
                    open_error = Some(format!("could not open log file '{}': {}", filename, err));
                    return;
                }
            }
        }

        let _ = builder.try_init();
    });

    match open_error {
        Some(msg) => Err(PyErr::new::<pyo3::exceptions::PyIOError, _>(msg)),
        None => Ok(()),
    }
}
