//! Screen buffer model
//!
//! Owns the character/color grid and applies the drawing operations the
//! command stream describes. Writes are bounds-checked and out-of-range
//! coordinates are silently clipped; clipping is a policy of this layer,
//! never an error.
//!
//! The screen starts unallocated (0x0) and uninitialized. `setup` sizes and
//! clears the grid; invoking it again reallocates and discards the previous
//! contents, which the wire format permits.

use serde::{Deserialize, Serialize};

use crate::core::cell::Cell;
use crate::core::color::ColorIndex;
use crate::core::grid::Grid;
use crate::core::raster::LinePoints;

/// The in-memory screen: a character grid with parallel colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    grid: Grid,
    /// Accepted at setup, reserved by the wire format. No effect yet.
    color_mode: u8,
    initialized: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create an empty, uninitialized screen.
    pub fn new() -> Self {
        Screen {
            grid: Grid::new(0, 0),
            color_mode: 0,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn color_mode(&self) -> u8 {
        self.color_mode
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        self.grid.cell(x, y)
    }

    /// Allocate both grids at the given dimensions and clear them.
    pub fn setup(&mut self, width: u8, height: u8, color_mode: u8) {
        self.grid = Grid::new(width as usize, height as usize);
        self.color_mode = color_mode;
        self.initialized = true;
    }

    /// Reset every cell to the default glyph and color. No-op before setup.
    pub fn clear(&mut self) {
        if !self.initialized {
            return;
        }
        self.grid.clear();
    }

    /// Clipped write: coordinates outside the grid on either edge are
    /// ignored. This is the path DrawChar, DrawLine, and RenderText use.
    pub fn write_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if x < 0 || y < 0 {
            return;
        }
        self.write_cell_upper_clipped(x as usize, y as usize, cell);
    }

    /// Write checked against the upper bounds only. DrawAtCursor goes
    /// through here: the cursor a display reports is never negative, and
    /// the narrower check is part of the observable contract.
    pub fn write_cell_upper_clipped(&mut self, x: usize, y: usize, cell: Cell) {
        if self.grid.contains(x, y) {
            *self.grid.cell_mut(x, y) = cell;
        }
    }

    /// Rasterize a segment, endpoints inclusive, writing one fixed cell
    /// through the clipped path.
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8, cell: Cell) {
        for (x, y) in LinePoints::new(x1 as i32, y1 as i32, x2 as i32, y2 as i32) {
            self.write_cell(x, y, cell);
        }
    }

    /// Write consecutive glyphs starting at (x, y), advancing one column per
    /// byte. Each write is clipped individually, so text running off the
    /// right edge just stops being visible.
    pub fn draw_text(&mut self, x: u8, y: u8, color: ColorIndex, text: &[u8]) {
        let mut col = x as i32;
        for &byte in text {
            self.write_cell(col, y as i32, Cell::from_byte(byte, color));
            col += 1;
        }
    }
}
