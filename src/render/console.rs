//! Crossterm-backed console display
//!
//! Queues cursor moves, colors, and glyphs against stdout; callers flush
//! once per frame.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::core::color::{ColorIndex, NamedColor};
use crate::render::display::Display;

/// The real console, driven through crossterm.
pub struct ConsoleDisplay {
    out: Stdout,
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        ConsoleDisplay { out: io::stdout() }
    }

    /// Push all queued output to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

fn foreground(color: ColorIndex) -> Color {
    match color.named() {
        NamedColor::Black => Color::Black,
        NamedColor::Red => Color::DarkRed,
        NamedColor::Green => Color::DarkGreen,
        NamedColor::Yellow => Color::DarkYellow,
        NamedColor::Blue => Color::DarkBlue,
        NamedColor::Magenta => Color::DarkMagenta,
        NamedColor::Cyan => Color::DarkCyan,
        NamedColor::White => Color::Grey,
        NamedColor::BrightBlack => Color::DarkGrey,
        NamedColor::BrightRed => Color::Red,
        NamedColor::BrightGreen => Color::Green,
        NamedColor::BrightYellow => Color::Yellow,
        NamedColor::BrightBlue => Color::Blue,
        NamedColor::BrightMagenta => Color::Magenta,
        NamedColor::BrightCyan => Color::Cyan,
        NamedColor::BrightWhite => Color::White,
    }
}

impl Display for ConsoleDisplay {
    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        // Reads back from the terminal; requires queued moves to be visible.
        self.out.flush()?;
        cursor::position()
    }

    fn set_cursor_position(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn write_glyph(&mut self, ch: char, color: ColorIndex) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(foreground(color)), Print(ch))
    }

    fn newline(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Print("\r\n"))
    }
}
