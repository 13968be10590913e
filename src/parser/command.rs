//! Commands produced by the decoder
//!
//! Each variant carries its already-validated argument bytes; the session
//! layer consumes them with one exhaustive match. Unknown opcodes never
//! become a `Command`, they fail at decode time.

use serde::{Deserialize, Serialize};

/// Opcode bytes of the wire format.
pub mod opcode {
    pub const SETUP: u8 = 0x01;
    pub const DRAW_CHAR: u8 = 0x02;
    pub const DRAW_LINE: u8 = 0x03;
    pub const RENDER_TEXT: u8 = 0x04;
    pub const MOVE_CURSOR: u8 = 0x05;
    pub const DRAW_AT_CURSOR: u8 = 0x06;
    pub const CLEAR: u8 = 0x07;
    pub const END: u8 = 0xFF;

    /// Terminator for RenderText payloads. Shares its value with END, so a
    /// text payload cannot contain this byte; the decoder truncates there
    /// and leaves the byte for the outer dispatch.
    pub const TEXT_END: u8 = 0xFF;
}

/// A decoded stream command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Allocate the screen. `color_mode` is reserved and currently unused.
    Setup { width: u8, height: u8, color_mode: u8 },
    /// Paint one character.
    DrawChar { x: u8, y: u8, color: u8, ch: u8 },
    /// Rasterize a segment with one fixed character and color.
    DrawLine {
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        color: u8,
        ch: u8,
    },
    /// Paint a run of characters left to right.
    RenderText {
        x: u8,
        y: u8,
        color: u8,
        text: Vec<u8>,
    },
    /// Relocate the display cursor. Does not touch the buffer.
    MoveCursor { x: u8, y: u8 },
    /// Paint one character at the display's current cursor.
    DrawAtCursor { ch: u8, color: u8 },
    /// Reset every cell to the default.
    Clear,
    /// Terminate the session.
    End,
}

impl Command {
    /// The opcode byte this command decodes from.
    pub fn opcode(&self) -> u8 {
        match self {
            Command::Setup { .. } => opcode::SETUP,
            Command::DrawChar { .. } => opcode::DRAW_CHAR,
            Command::DrawLine { .. } => opcode::DRAW_LINE,
            Command::RenderText { .. } => opcode::RENDER_TEXT,
            Command::MoveCursor { .. } => opcode::MOVE_CURSOR,
            Command::DrawAtCursor { .. } => opcode::DRAW_AT_CURSOR,
            Command::Clear => opcode::CLEAR,
            Command::End => opcode::END,
        }
    }

    /// Whether the command may run before a successful Setup.
    pub fn allowed_uninitialized(&self) -> bool {
        matches!(self, Command::Setup { .. } | Command::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_roundtrip() {
        assert_eq!(
            Command::Setup {
                width: 20,
                height: 10,
                color_mode: 1
            }
            .opcode(),
            opcode::SETUP
        );
        assert_eq!(Command::Clear.opcode(), opcode::CLEAR);
        assert_eq!(Command::End.opcode(), opcode::END);
    }

    #[test]
    fn test_setup_and_end_run_uninitialized() {
        assert!(Command::Setup {
            width: 1,
            height: 1,
            color_mode: 0
        }
        .allowed_uninitialized());
        assert!(Command::End.allowed_uninitialized());
        assert!(!Command::Clear.allowed_uninitialized());
        assert!(!Command::MoveCursor { x: 0, y: 0 }.allowed_uninitialized());
    }
}
