//! Character grid
//!
//! Row-major 2D array of cells. Addressing is (x, y) with x = column and
//! y = row, matching the wire format's coordinate convention. The grid has
//! no scrolling or resizing; dimensions are fixed when it is allocated.

use serde::{Deserialize, Serialize};

use crate::core::cell::Cell;

/// A 2D grid of screen cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order (index = y * width + x).
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid with every cell set to the default.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the given coordinates fall inside the grid.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get a reference to a cell. Panics if out of bounds; callers clip first.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * self.width + x]
    }

    /// Get a mutable reference to a cell. Panics if out of bounds.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y * self.width + x]
    }

    /// Reset every cell to the default glyph and color.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::ColorIndex;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 10);
        assert!(grid.cell(19, 9).is_blank());
    }

    #[test]
    fn test_grid_cell_access() {
        let mut grid = Grid::new(20, 10);
        *grid.cell_mut(3, 7) = Cell::new('A', ColorIndex::new(12));
        assert_eq!(grid.cell(3, 7).ch, 'A');
        assert!(grid.cell(7, 3).is_blank());
    }

    #[test]
    fn test_grid_contains() {
        let grid = Grid::new(4, 2);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(3, 1));
        assert!(!grid.contains(4, 1));
        assert!(!grid.contains(3, 2));
    }

    #[test]
    fn test_grid_clear() {
        let mut grid = Grid::new(4, 4);
        *grid.cell_mut(1, 1) = Cell::new('X', ColorIndex::new(9));
        grid.clear();
        for y in 0..4 {
            for x in 0..4 {
                assert!(grid.cell(x, y).is_blank());
            }
        }
    }

    #[test]
    fn test_grid_zero_sized() {
        let grid = Grid::new(0, 5);
        assert_eq!(grid.width(), 0);
        assert!(!grid.contains(0, 0));
    }
}
