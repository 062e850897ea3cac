//! Depth-bounded entry into embedded (nested) messages.
//!
//! An embedded message is a length-delimited payload the caller decodes
//! recursively. `enter` validates the payload bounds and hands back a
//! `MessageFrame`: the buffer truncated at the payload end (so nested decodes
//! cannot run past it), the start position, and the depth of the nested
//! message. Recursion depth is the caller's to carry; the frame only checks it.

use log::debug;

use crate::config::CodecConfig;
use crate::error::WireError;
use crate::kernels::length_delimited;

/// A validated view of one embedded message's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFrame<'a> {
    /// The enclosing buffer, truncated at the end of this message's payload.
    /// Positions stay absolute, so `start` indexes into this slice directly.
    pub bounded: &'a [u8],
    /// Position of the first byte of the nested message.
    pub start: usize,
    /// Depth of the nested message; the top-level message is depth 0.
    pub depth: usize,
}

impl<'a> MessageFrame<'a> {
    /// The position one past the nested message; also where the parent resumes.
    pub fn end(&self) -> usize {
        self.bounded.len()
    }

    /// Returns `true` once `pos` has consumed the whole nested message.
    pub fn is_exhausted(&self, pos: usize) -> bool {
        pos >= self.end()
    }

    /// The nested message's bytes.
    pub fn payload(&self) -> &'a [u8] {
        &self.bounded[self.start..]
    }
}

/// Enters the embedded message whose length prefix starts at `pos`.
///
/// `depth` is the depth of the message that contains the field.
///
/// # Errors
/// * Any length-delimited failure of the prefix.
/// * `NestingTooDeep` if the nested message would reach `max_nesting_depth`.
pub fn enter<'a>(
    buffer: &'a [u8],
    pos: usize,
    depth: usize,
    config: &CodecConfig,
) -> Result<MessageFrame<'a>, WireError> {
    let child_depth = depth.saturating_add(1);
    if child_depth >= config.max_nesting_depth {
        debug!(
            "refusing embedded message at {}: depth {} reaches limit {}",
            pos, child_depth, config.max_nesting_depth
        );
        return Err(WireError::NestingTooDeep(config.max_nesting_depth));
    }

    let span = length_delimited::decode_embedded_message(buffer, pos)?;
    Ok(MessageFrame {
        bounded: &buffer[..span.end()],
        start: span.new_position,
        depth: child_depth,
    })
}
