//! Rendering the screen buffer to a display surface
//!
//! The renderer is an output-only boundary: it clears the display, then
//! walks the buffer row by row and emits every cell's glyph under its
//! stored color.

pub mod console;
pub mod display;
pub mod headless;

pub use console::ConsoleDisplay;
pub use display::Display;
pub use headless::HeadlessDisplay;

use std::io;

use crate::core::screen::Screen;

/// Emit the whole screen to the display.
pub fn render<D: Display>(screen: &Screen, display: &mut D) -> io::Result<()> {
    display.clear()?;
    for y in 0..screen.height() {
        for x in 0..screen.width() {
            let cell = screen.cell(x, y);
            display.write_glyph(cell.ch, cell.color)?;
        }
        display.newline()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::ColorIndex;
    use crate::core::screen::Screen;

    #[test]
    fn test_render_walks_rows_top_to_bottom() {
        let mut screen = Screen::new();
        screen.setup(3, 2, 0);
        screen.draw_text(0, 0, ColorIndex::new(7), b"abc");
        screen.draw_text(0, 1, ColorIndex::new(7), b"def");

        let mut display = HeadlessDisplay::new();
        render(&screen, &mut display).unwrap();

        assert_eq!(display.text(), "abc\ndef\n");
        assert_eq!(display.clear_count(), 1);
    }

    #[test]
    fn test_render_preserves_cell_colors() {
        let mut screen = Screen::new();
        screen.setup(2, 1, 0);
        screen.draw_text(0, 0, ColorIndex::new(12), b"A");

        let mut display = HeadlessDisplay::new();
        render(&screen, &mut display).unwrap();

        assert_eq!(display.lines()[0][0], ('A', ColorIndex::new(12)));
        assert_eq!(display.lines()[0][1], (' ', ColorIndex::BLACK));
    }

    #[test]
    fn test_render_uninitialized_screen_emits_nothing() {
        let screen = Screen::new();
        let mut display = HeadlessDisplay::new();
        render(&screen, &mut display).unwrap();
        assert_eq!(display.text(), "");
        assert_eq!(display.clear_count(), 1);
    }
}
