//! This module provides diagnostics hooks for the codec's validation decisions.
//!
//! A decoder whose whole job is to reject input needs visibility into *why* it
//! rejected it. The `log_metric!` macro emits one structured key-value record
//! through the `log` facade under the `canonpb::metric` target.
//!
//! It is compiled out of release builds: the `#[cfg(debug_assertions)]`
//! attribute removes the macro body, so hot decode paths pay nothing in production.

/// Logs a structured key-value metric record at debug level, only in debug builds.
///
/// # Example
/// ```
/// use canonpb::log_metric;
/// let position = 4;
/// log_metric!("event"="decode_rejected", "op"="decode_bool", "position"=&position);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts: Vec<String> = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            $crate::__log::debug!(target: "canonpb::metric", "CANONPB_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}
