//! Decode session
//!
//! One session processes one fully-available byte stream to completion:
//! success, an explicit End, or the first error. Commands decode one at a
//! time and apply immediately, so cells written before a failure stay in
//! the buffer; there is no rollback.

use std::io;

use log::{debug, trace};

use crate::core::cell::Cell;
use crate::core::color::ColorIndex;
use crate::core::screen::Screen;
use crate::error::StreamError;
use crate::parser::command::Command;
use crate::parser::decoder::Decoder;
use crate::render::{self, Display};

/// A decode session: screen buffer plus the injected display collaborator.
#[derive(Debug)]
pub struct Session<D> {
    screen: Screen,
    display: D,
}

impl<D: Display> Session<D> {
    pub fn new(display: D) -> Self {
        Session {
            screen: Screen::new(),
            display,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Decode and apply a complete command stream.
    ///
    /// Halts at `End`, at stream exhaustion, or on the first error; it never
    /// skips a bad command and continues.
    pub fn run(&mut self, stream: &[u8]) -> Result<(), StreamError> {
        let mut decoder = Decoder::new(stream);
        while let Some(command) = decoder.next_command()? {
            trace!("apply {:?}", command);
            if !command.allowed_uninitialized() && !self.screen.is_initialized() {
                return Err(StreamError::UninitializedScreen(command.opcode()));
            }
            match command {
                Command::Setup {
                    width,
                    height,
                    color_mode,
                } => {
                    debug!("screen setup: {}x{}, color mode {}", width, height, color_mode);
                    self.screen.setup(width, height, color_mode);
                }
                Command::DrawChar { x, y, color, ch } => {
                    self.screen
                        .write_cell(x as i32, y as i32, Cell::from_byte(ch, ColorIndex::new(color)));
                }
                Command::DrawLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    ch,
                } => {
                    self.screen
                        .draw_line(x1, y1, x2, y2, Cell::from_byte(ch, ColorIndex::new(color)));
                }
                Command::RenderText { x, y, color, text } => {
                    self.screen.draw_text(x, y, ColorIndex::new(color), &text);
                }
                Command::MoveCursor { x, y } => {
                    self.display.set_cursor_position(x as u16, y as u16)?;
                }
                Command::DrawAtCursor { ch, color } => {
                    let (x, y) = self.display.cursor_position()?;
                    // Upper bounds only; the reported cursor is never negative.
                    self.screen.write_cell_upper_clipped(
                        x as usize,
                        y as usize,
                        Cell::from_byte(ch, ColorIndex::new(color)),
                    );
                }
                Command::Clear => {
                    self.screen.clear();
                }
                Command::End => break,
            }
        }
        Ok(())
    }

    /// Emit the current buffer to the display.
    pub fn render(&mut self) -> io::Result<()> {
        render::render(&self.screen, &mut self.display)
    }
}
