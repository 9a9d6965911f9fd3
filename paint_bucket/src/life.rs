// life.rs - Life-style generations on the wrapping canvas, one coroutine per row

use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Runtime;

use crate::grid::{self, Cell, TGrid, TRow};

/// Offsets of the eight surrounding cells.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Computes the next state of one row. Survivors keep their paint, newborn
/// cells take `paint`.
async fn process_row(row_index: usize, current: Arc<TGrid>, paint: Cell) -> (usize, TRow) {
    let shape = grid::shape(&current);
    let mut row_result = vec![Cell::Empty; shape.width];
    for col in 0..shape.width {
        let count = NEIGHBORHOOD
            .iter()
            .filter_map(|&(dx, dy)| shape.wrap(col as isize + dx, row_index as isize + dy))
            .filter(|p| current[p.y][p.x].is_painted())
            .count();

        let cell = current[row_index][col];
        row_result[col] = match (cell.is_painted(), count) {
            (true, 2) | (true, 3) => cell, // Survival
            (false, 3)            => paint, // Birth
            _                     => Cell::Empty,
        };

        tokio::task::yield_now().await;
    }
    (row_index, row_result)
}

/// Advances the whole canvas by one generation. Every row runs as its own
/// task on `runtime`; results are stitched back by row index.
pub fn step(runtime: &Runtime, current: &TGrid, paint: Cell) -> Result<TGrid> {
    runtime.block_on(async {
        let snapshot = Arc::new(current.clone());
        let handles: Vec<_> = (0..snapshot.len())
            .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot), paint)))
            .collect();

        let mut next = grid::blank(grid::shape(current).width, current.len());
        for handle in handles {
            let (row_index, completed_row) = handle.await?;
            next[row_index] = completed_row;
        }
        Ok::<_, anyhow::Error>(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{self, Pattern};

    fn painted(grid: &TGrid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if cell.is_painted() {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn blinker_turns_across_the_seam() {
        let runtime = Runtime::new().unwrap();
        let mut grid = grid::blank(5, 5);
        for x in [4, 0, 1] {
            grid[2][x] = Cell::Red;
        }
        let next = step(&runtime, &grid, Cell::Blue).unwrap();
        assert_eq!(painted(&next), vec![(0, 1), (0, 2), (0, 3)]);
        assert_eq!(next[2][0], Cell::Red); // survivor keeps its paint
        assert_eq!(next[1][0], Cell::Blue); // newborn takes the new paint
    }

    #[test]
    fn glider_returns_home_after_circling_the_torus() {
        let runtime = Runtime::new().unwrap();
        let glider: &Pattern = patterns::PATTERNS.iter().find(|p| p.name == "Glider").unwrap();
        let mut grid = grid::blank(8, 8);
        patterns::apply_pattern(&mut grid, glider, Cell::Green);
        let start = painted(&grid);

        // A glider moves one cell diagonally every four generations.
        let mut current = grid;
        for _ in 0..32 {
            current = step(&runtime, &current, Cell::Green).unwrap();
        }
        assert_eq!(painted(&current), start);
    }

    #[test]
    fn lone_cell_dies() {
        let runtime = Runtime::new().unwrap();
        let mut grid = grid::blank(4, 3);
        grid[1][1] = Cell::Yellow;
        let next = step(&runtime, &grid, Cell::Yellow).unwrap();
        assert!(painted(&next).is_empty());
    }
}
