//! Error types for stream decoding.

use std::io;
use thiserror::Error;

/// Fatal decode-session errors. Any of these aborts the session; cells
/// written by earlier commands are left in the buffer as-is.
///
/// Out-of-bounds drawing coordinates are deliberately not represented here:
/// those are clipped silently by the screen.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("unknown opcode byte: 0x{0:02X}")]
    UnknownOpcode(u8),

    #[error("truncated stream: opcode 0x{opcode:02X} requires {required} argument bytes but only {available} remain")]
    TruncatedStream {
        opcode: u8,
        required: usize,
        available: usize,
    },

    #[error("opcode 0x{0:02X} issued before screen setup")]
    UninitializedScreen(u8),

    #[error("display I/O error: {0}")]
    Display(#[from] io::Error),
}
