//! Flood fill over rectangular grids whose edges wrap around.
//!
//! A fill starts from a seed cell, captures the seed's value once, and
//! mutates every cell reachable from the seed through left/right/up/down
//! steps (wrapping across both edges) whose value matches that captured
//! target. Which cells match and how they are written are pluggable; see
//! [`CellEquality`] and [`CellMutation`].
//!
//! ```
//! use flood_fill::{Point, ToroidalFloodFill};
//!
//! let mut grid = vec![
//!     vec![1, 0, 0, 1],
//!     vec![0, 0, 0, 0],
//! ];
//! let mut filled = Vec::new();
//! let n = ToroidalFloodFill::new(&mut grid).fill_into(&7, 0, 0, &mut filled)?;
//! assert_eq!(n, 2); // (3, 0) is reached across the left edge
//! assert!(filled.contains(&Point::new(3, 0)));
//! # Ok::<(), flood_fill::FillError>(())
//! ```

mod engine;
mod error;
mod grid;
mod strategy;

pub use engine::{ToroidalFloodFill, flood_fill};
pub use error::FillError;
pub use grid::{GridShape, Point};
pub use strategy::{CellEquality, CellMutation, Overwrite, ValueEq};
