// engine.rs - Flood fill over a grid whose edges wrap around

use tracing::{debug, trace};

use crate::{CellEquality, CellMutation, FillError, GridShape, Overwrite, Point, ValueEq};

/// Flood fill over a borrowed grid of rows, with 4-way adjacency that wraps
/// across both edges.
///
/// The equality and mutation strategies are fixed at construction. The same
/// engine can run any number of fills against its grid.
pub struct ToroidalFloodFill<'g, V, E = ValueEq, M = Overwrite> {
    grid: &'g mut [Vec<V>],
    equality: E,
    mutation: M,
}

impl<'g, V> ToroidalFloodFill<'g, V>
where
    V: Clone + PartialEq,
{
    pub fn new(grid: &'g mut [Vec<V>]) -> Self {
        Self::with_strategies(grid, ValueEq, Overwrite)
    }
}

impl<'g, V, E> ToroidalFloodFill<'g, V, E>
where
    V: Clone,
    E: CellEquality<V>,
{
    pub fn with_equality(grid: &'g mut [Vec<V>], equality: E) -> Self {
        Self::with_strategies(grid, equality, Overwrite)
    }
}

impl<'g, V, E, M> ToroidalFloodFill<'g, V, E, M>
where
    V: Clone,
    E: CellEquality<V>,
    M: CellMutation<V>,
{
    pub fn with_strategies(grid: &'g mut [Vec<V>], equality: E, mutation: M) -> Self {
        Self { grid, equality, mutation }
    }

    pub fn grid(&self) -> &[Vec<V>] {
        self.grid
    }

    /// Fills the region around `(x, y)` with `replacement` and returns how
    /// many cells were mutated.
    ///
    /// Returns `Ok(0)` without touching the grid when `replacement` already
    /// matches the seed's value.
    pub fn fill(&mut self, replacement: &V, x: usize, y: usize) -> Result<usize, FillError> {
        self.run(replacement, x, y, None)
    }

    /// Like [`fill`](Self::fill), also appending each mutated coordinate to
    /// `out` in the order the cells were mutated.
    pub fn fill_into(
        &mut self,
        replacement: &V,
        x: usize,
        y: usize,
        out: &mut Vec<Point>,
    ) -> Result<usize, FillError> {
        self.run(replacement, x, y, Some(out))
    }

    /// Cells a fill seeded at `(x, y)` would accept, in traversal order.
    /// Nothing is mutated and the no-op guard does not apply.
    pub fn region(&self, x: usize, y: usize) -> Result<Vec<Point>, FillError> {
        let (shape, seed) = self.check(x, y)?;
        let target = self.grid[y][x].clone();

        let mut region = Vec::new();
        walk(&*self.grid, shape, seed, &target, &self.equality, |_, p| region.push(p));
        Ok(region)
    }

    /// Cells `fill(replacement, x, y)` would mutate, in the order it would
    /// mutate them. Empty when the no-op guard applies.
    pub fn preview(&self, replacement: &V, x: usize, y: usize) -> Result<Vec<Point>, FillError> {
        let (_, seed) = self.check(x, y)?;
        if self.equality.matches(replacement, &self.grid[y][x]) {
            trace!(%seed, "replacement matches seed, nothing to preview");
            return Ok(Vec::new());
        }
        self.region(x, y)
    }

    fn check(&self, x: usize, y: usize) -> Result<(GridShape, Point), FillError> {
        let shape = GridShape::of(self.grid)?;
        let seed = Point::new(x, y);
        if !shape.contains(seed) {
            return Err(FillError::OutOfBounds {
                x,
                y,
                width: shape.width,
                height: shape.height,
            });
        }
        Ok((shape, seed))
    }

    fn run(
        &mut self,
        replacement: &V,
        x: usize,
        y: usize,
        mut out: Option<&mut Vec<Point>>,
    ) -> Result<usize, FillError> {
        let (shape, seed) = self.check(x, y)?;
        let target = self.grid[y][x].clone();

        if self.equality.matches(replacement, &target) {
            trace!(%seed, "replacement matches seed, nothing to fill");
            return Ok(0);
        }

        let mut filled = 0;
        let mutation = &self.mutation;
        walk(&mut *self.grid, shape, seed, &target, &self.equality, |grid, p| {
            mutation.apply(grid, replacement, p);
            if let Some(out) = out.as_deref_mut() {
                out.push(p);
            }
            filled += 1;
        });

        debug!(%seed, filled, width = shape.width, height = shape.height, "flood fill complete");
        Ok(filled)
    }
}

/// Depth-first walk from `seed` over cells matching `target`. `accept` runs
/// once per matching cell, before any of its neighbours are examined.
fn walk<V, E, G>(
    mut grid: G,
    shape: GridShape,
    seed: Point,
    target: &V,
    equality: &E,
    mut accept: impl FnMut(&mut G, Point),
) where
    E: CellEquality<V>,
    G: AsRef<[Vec<V>]>,
{
    let mut visited = vec![false; shape.cells()];
    let mut frontier = vec![seed];
    while let Some(p) = frontier.pop() {
        let i = shape.index(p);
        if visited[i] {
            continue;
        }
        visited[i] = true;
        if !equality.matches(&grid.as_ref()[p.y][p.x], target) {
            continue;
        }
        accept(&mut grid, p);
        frontier.extend(shape.neighbors(p));
    }
}

/// One-shot fill with value equality and overwrite.
pub fn flood_fill<V>(
    grid: &mut [Vec<V>],
    replacement: &V,
    x: usize,
    y: usize,
) -> Result<usize, FillError>
where
    V: Clone + PartialEq,
{
    ToroidalFloodFill::new(grid).fill(replacement, x, y)
}
