// grid.rs - Cell and grid types for the paint bucket canvas

use flood_fill::GridShape;

pub const DEFAULT_SIZE: usize = 50; // Default canvas is 50x50, edges wrap

/// One canvas cell: unpainted, or painted with one of the palette colours.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl Cell {
    pub const PAINTS: [Cell; 5] = [Cell::Red, Cell::Green, Cell::Blue, Cell::Yellow, Cell::Purple];

    pub fn is_painted(self) -> bool {
        self != Cell::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            Cell::Empty => "Empty",
            Cell::Red => "Red",
            Cell::Green => "Green",
            Cell::Blue => "Blue",
            Cell::Yellow => "Yellow",
            Cell::Purple => "Purple",
        }
    }
}

pub type TRow = Vec<Cell>;
pub type TGrid = Vec<TRow>;

pub fn blank(width: usize, height: usize) -> TGrid {
    vec![vec![Cell::Empty; width]; height]
}

/// Shape of a canvas built by [`blank`]; canvases are always rectangular.
pub fn shape(grid: &TGrid) -> GridShape {
    GridShape::new(grid.first().map_or(0, Vec::len), grid.len())
}
