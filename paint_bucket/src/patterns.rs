use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::{self, Cell, TGrid};

/// How a pattern lays out its cells.
pub enum Layout {
    /// (dx, dy) offsets from the canvas centre, wrapped onto the torus.
    Cells(&'static [(isize, isize)]),
    /// A vertical band centred on the left/right seam.
    SeamBand,
    /// Every other cell; each painted cell is its own region.
    Checkerboard,
}

pub struct Pattern {
    pub name: &'static str,
    pub layout: Layout,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        layout: Layout::Cells(&[(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)]),
    },
    Pattern {
        name: "Blinker",
        layout: Layout::Cells(&[(-1, 0), (0, 0), (1, 0)]),
    },
    Pattern {
        name: "Beacon",
        layout: Layout::Cells(&[(-2, -2), (-1, -2), (-2, -1), (-1, -1), (0, 0), (1, 0), (0, 1), (1, 1)]),
    },
    Pattern {
        name: "R-pentomino",
        layout: Layout::Cells(&[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)]),
    },
    Pattern {
        name: "Seam band",
        layout: Layout::SeamBand,
    },
    Pattern {
        name: "Checkerboard",
        layout: Layout::Checkerboard,
    },
];

pub fn apply_pattern(grid: &mut TGrid, pattern: &Pattern, paint: Cell) {
    let shape = grid::shape(grid);
    // Clear grid first
    *grid = grid::blank(shape.width, shape.height);

    match pattern.layout {
        Layout::Cells(cells) => {
            let (cx, cy) = ((shape.width / 2) as isize, (shape.height / 2) as isize);
            for &(dx, dy) in cells {
                if let Some(p) = shape.wrap(cx + dx, cy + dy) {
                    grid[p.y][p.x] = paint;
                }
            }
        }
        Layout::SeamBand => {
            let band = (shape.width / 4).max(1);
            for row in grid.iter_mut() {
                for (x, cell) in row.iter_mut().enumerate() {
                    if (x + band / 2) % shape.width < band {
                        *cell = paint;
                    }
                }
            }
        }
        Layout::Checkerboard => {
            for (y, row) in grid.iter_mut().enumerate() {
                for (x, cell) in row.iter_mut().enumerate() {
                    if (x + y) % 2 == 0 {
                        *cell = paint;
                    }
                }
            }
        }
    }
}

/// Paints roughly `density` percent of the canvas, cycling through the
/// palette so neighbouring regions usually differ in colour.
pub fn apply_random_pattern(grid: &mut TGrid, seed_value: u32, density: u8) {
    let shape = grid::shape(grid);
    *grid = grid::blank(shape.width, shape.height);

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if (seed >> 16) % 100 < u64::from(density) {
                *cell = Cell::PAINTS[((seed >> 40) as usize) % Cell::PAINTS.len()];
            }
        }
    }
}
