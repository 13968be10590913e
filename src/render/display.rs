//! Display surface abstraction
//!
//! The interpreter never talks to a terminal directly. Cursor state and
//! glyph emission live behind this trait, injected into the session, so the
//! whole pipeline runs headlessly in tests.

use std::io;

use crate::core::color::ColorIndex;

/// An output surface with a cursor.
///
/// The cursor belongs to the display, not the screen buffer; the session
/// queries it fresh on every use and never caches it.
pub trait Display {
    /// Current cursor position as (x, y).
    fn cursor_position(&mut self) -> io::Result<(u16, u16)>;

    /// Relocate the cursor.
    fn set_cursor_position(&mut self, x: u16, y: u16) -> io::Result<()>;

    /// Clear the whole surface.
    fn clear(&mut self) -> io::Result<()>;

    /// Emit one glyph at the cursor in the given color.
    fn write_glyph(&mut self, ch: char, color: ColorIndex) -> io::Result<()>;

    /// Move to the start of the next line.
    fn newline(&mut self) -> io::Result<()>;
}
