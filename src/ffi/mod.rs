//! Foreign-function surfaces over the `bridge` API.

pub mod python;
