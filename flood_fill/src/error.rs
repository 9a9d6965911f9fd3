// error.rs - Contract violations reported by the fill engine

use thiserror::Error;

/// Errors returned by a fill before any cell is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    #[error("seed ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("row {row} has {len} cells but the grid is {width} wide")]
    Ragged { row: usize, len: usize, width: usize },
}
