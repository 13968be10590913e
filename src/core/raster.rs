//! Integer line rasterization
//!
//! Bresenham's algorithm over the 8-connected grid. The iterator yields the
//! discrete points a segment touches, both endpoints inclusive; the caller
//! writes them through the screen's clipped path.

/// Iterator over the grid points of a line segment.
///
/// The step direction on a zero-length axis is -1 (the classic formulation's
/// `sign(0) = -1`). Like any Bresenham walk, swapping the endpoints can pick
/// a different (equally valid) staircase for non-degenerate slopes; only
/// axis-aligned and perfect-diagonal segments are reversal-symmetric.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x2: i32,
    y2: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LinePoints {
    /// Walk from (x1, y1) to (x2, y2) inclusive.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        LinePoints {
            x: x1,
            y: y1,
            x2,
            y2,
            dx,
            dy,
            sx,
            sy,
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if self.x == self.x2 && self.y == self.y2 {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.x += self.sx;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }
        Some(point)
    }
}
