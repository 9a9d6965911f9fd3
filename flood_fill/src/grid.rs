// grid.rs - Coordinates and toroidal geometry for row-major grids

use std::fmt;

use crate::FillError;

/// A cell coordinate: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a rectangular grid, treated as a torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub width: usize,
    pub height: usize,
}

impl GridShape {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Derives the shape from the rows: width from the first row, height from
    /// the row count. Every row must match the first.
    pub fn of<V>(rows: &[Vec<V>]) -> Result<Self, FillError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(FillError::Ragged { row, len: r.len(), width });
        }
        Ok(Self { width, height: rows.len() })
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index of `p`. `p` must lie inside the grid.
    pub fn index(&self, p: Point) -> usize {
        p.y * self.width + p.x
    }

    /// Left, right, up and down neighbours of `p`, wrapping across both edges.
    ///
    /// On a one-wide or one-high grid some of these are `p` itself.
    ///
    /// # Panics
    ///
    /// Panics if the shape has no cells.
    pub fn neighbors(&self, p: Point) -> [Point; 4] {
        let (w, h) = (self.width, self.height);
        [
            Point::new((p.x + w - 1) % w, p.y), // left
            Point::new((p.x + 1) % w, p.y),     // right
            Point::new(p.x, (p.y + h - 1) % h), // up
            Point::new(p.x, (p.y + 1) % h),     // down
        ]
    }

    /// Maps a signed coordinate onto the torus, or `None` if the shape has
    /// no cells to map onto.
    pub fn wrap(&self, x: isize, y: isize) -> Option<Point> {
        if self.cells() == 0 {
            return None;
        }
        Some(Point::new(
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        ))
    }
}
