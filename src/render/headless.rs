//! In-memory display for tests and the headless driver
//!
//! Records everything a real console would show: emitted glyph lines, the
//! cursor position, and how many times the surface was cleared.

use std::io;

use crate::core::color::ColorIndex;
use crate::render::display::Display;

/// A display that keeps its output in memory.
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    cursor: (u16, u16),
    finished: Vec<Vec<(char, ColorIndex)>>,
    current: Vec<(char, ColorIndex)>,
    clear_count: usize,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the cursor without going through the trait, for test setup.
    pub fn put_cursor(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Emitted glyphs with their colors, one vec per finished line.
    pub fn lines(&self) -> &[Vec<(char, ColorIndex)>] {
        &self.finished
    }

    /// Everything emitted so far as plain text, newline-separated.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.finished {
            out.extend(line.iter().map(|&(ch, _)| ch));
            out.push('\n');
        }
        out.extend(self.current.iter().map(|&(ch, _)| ch));
        out
    }
}

impl Display for HeadlessDisplay {
    fn cursor_position(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.cursor)
    }

    fn set_cursor_position(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.finished.clear();
        self.current.clear();
        self.cursor = (0, 0);
        self.clear_count += 1;
        Ok(())
    }

    fn write_glyph(&mut self, ch: char, color: ColorIndex) -> io::Result<()> {
        self.current.push((ch, color));
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        self.finished.push(std::mem::take(&mut self.current));
        Ok(())
    }
}
