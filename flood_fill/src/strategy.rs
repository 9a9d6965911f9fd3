// strategy.rs - Pluggable equality and mutation for the fill engine

use crate::Point;

/// Decides whether a candidate cell belongs to the region seeded by `target`.
///
/// `target` is the seed's value read before the fill mutates anything; it
/// stays the same for the whole fill.
pub trait CellEquality<V> {
    fn matches(&self, candidate: &V, target: &V) -> bool;
}

impl<V, F> CellEquality<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    fn matches(&self, candidate: &V, target: &V) -> bool {
        self(candidate, target)
    }
}

/// Writes the replacement into a cell accepted into the region.
///
/// Called exactly once per accepted cell, at the moment it is accepted.
pub trait CellMutation<V> {
    fn apply(&self, grid: &mut [Vec<V>], replacement: &V, at: Point);
}

impl<V, F> CellMutation<V> for F
where
    F: Fn(&mut [Vec<V>], &V, Point),
{
    fn apply(&self, grid: &mut [Vec<V>], replacement: &V, at: Point) {
        self(grid, replacement, at)
    }
}

/// `PartialEq` equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueEq;

impl<V: PartialEq> CellEquality<V> for ValueEq {
    fn matches(&self, candidate: &V, target: &V) -> bool {
        candidate == target
    }
}

/// Replaces the whole cell with a clone of the replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overwrite;

impl<V: Clone> CellMutation<V> for Overwrite {
    fn apply(&self, grid: &mut [Vec<V>], replacement: &V, at: Point) {
        grid[at.y][at.x] = replacement.clone();
    }
}
