//! Serializable screen snapshots
//!
//! A snapshot captures the visible state of a screen as plain data: one
//! string per row plus the parallel color indices. Used by tests for
//! readable assertions and by the headless driver for JSON output.

use serde::{Deserialize, Serialize};

use crate::core::screen::Screen;

/// Plain-data capture of a screen's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    /// Screen text, one string per row.
    pub rows: Vec<String>,
    /// Palette index per cell, same shape as `rows`.
    pub colors: Vec<Vec<u8>>,
}

impl Snapshot {
    /// Capture the current contents of a screen.
    pub fn capture(screen: &Screen) -> Self {
        let width = screen.width();
        let height = screen.height();
        let mut rows = Vec::with_capacity(height);
        let mut colors = Vec::with_capacity(height);
        for y in 0..height {
            let mut row = String::with_capacity(width);
            let mut row_colors = Vec::with_capacity(width);
            for x in 0..width {
                let cell = screen.cell(x, y);
                row.push(cell.ch);
                row_colors.push(cell.color.index());
            }
            rows.push(row);
            colors.push(row_colors);
        }
        Snapshot {
            width,
            height,
            rows,
            colors,
        }
    }

    /// Row text with trailing blanks removed, for compact assertions.
    pub fn trimmed_row(&self, y: usize) -> &str {
        self.rows[y].trim_end()
    }
}
