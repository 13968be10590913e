//! Binary command stream decoder
//!
//! Reads one opcode byte at a time from a fully-available byte slice and
//! produces `Command` values with their argument bytes validated. Decoding
//! is strictly sequential; after an error the read position is unspecified
//! and the caller must not continue.

use crate::error::StreamError;
use crate::parser::command::{opcode, Command};

/// Sequential decoder over one command stream.
#[derive(Debug)]
pub struct Decoder<'a> {
    stream: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Decoder { stream, pos: 0 }
    }

    /// Current read position, in bytes from the start of the stream.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Decode the next command. Returns `Ok(None)` when the stream is
    /// exhausted without an explicit End, which terminates the session
    /// normally.
    pub fn next_command(&mut self) -> Result<Option<Command>, StreamError> {
        let Some(&op) = self.stream.get(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;

        let command = match op {
            opcode::SETUP => {
                let [width, height, color_mode] = self.args(op)?;
                Command::Setup {
                    width,
                    height,
                    color_mode,
                }
            }
            opcode::DRAW_CHAR => {
                let [x, y, color, ch] = self.args(op)?;
                Command::DrawChar { x, y, color, ch }
            }
            opcode::DRAW_LINE => {
                let [x1, y1, x2, y2, color, ch] = self.args(op)?;
                Command::DrawLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    ch,
                }
            }
            opcode::RENDER_TEXT => {
                let [x, y, color] = self.args(op)?;
                let text = self.take_text();
                Command::RenderText { x, y, color, text }
            }
            opcode::MOVE_CURSOR => {
                let [x, y] = self.args(op)?;
                Command::MoveCursor { x, y }
            }
            opcode::DRAW_AT_CURSOR => {
                let [ch, color] = self.args(op)?;
                Command::DrawAtCursor { ch, color }
            }
            opcode::CLEAR => Command::Clear,
            opcode::END => Command::End,
            other => return Err(StreamError::UnknownOpcode(other)),
        };
        Ok(Some(command))
    }

    /// Consume exactly N argument bytes, or fail with the bytes left.
    fn args<const N: usize>(&mut self, op: u8) -> Result<[u8; N], StreamError> {
        let available = self.stream.len() - self.pos;
        if available < N {
            return Err(StreamError::TruncatedStream {
                opcode: op,
                required: N,
                available,
            });
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.stream[self.pos..self.pos + N]);
        self.pos += N;
        Ok(bytes)
    }

    /// Consume payload bytes up to, but not including, the terminator.
    /// The terminator stays in the stream for the outer dispatch.
    fn take_text(&mut self) -> Vec<u8> {
        let start = self.pos;
        while self.pos < self.stream.len() && self.stream[self.pos] != opcode::TEXT_END {
            self.pos += 1;
        }
        self.stream[start..self.pos].to_vec()
    }
}
