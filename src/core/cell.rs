//! Screen cell representation
//!
//! A cell is one character position in the grid: a glyph plus its foreground
//! palette index. Default cells are a space on black, which is also what
//! `Clear` resets everything to.

use serde::{Deserialize, Serialize};

use crate::core::color::ColorIndex;

/// A single cell in the screen grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Glyph shown in the cell.
    pub ch: char,
    /// Foreground palette index.
    pub color: ColorIndex,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            color: ColorIndex::BLACK,
        }
    }
}

impl Cell {
    pub fn new(ch: char, color: ColorIndex) -> Self {
        Cell { ch, color }
    }

    /// Build a cell from a raw stream byte. Wire characters are single
    /// bytes, decoded as their Latin-1 identity.
    pub fn from_byte(byte: u8, color: ColorIndex) -> Self {
        Cell {
            ch: byte as char,
            color,
        }
    }

    /// A default cell: space with the default color.
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && self.color == ColorIndex::BLACK
    }

    pub fn reset(&mut self) {
        *self = Cell::default();
    }
}
