use std::collections::HashSet;

use super::grid::GridSpace;
use super::state::Position;
use rand::Rng;

/// Index of cells currently held by the snake, consumables and stones
///
/// Whoever moves an object onto or off a cell keeps this index in step, so
/// new objects can be dropped onto free cells only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyTracker {
    cells: HashSet<Position>,
}

impl OccupancyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Mark a cell occupied. Occupying twice is the same as once.
    pub fn occupy(&mut self, pos: Position) {
        self.cells.insert(pos);
    }

    /// Mark a cell free. Releasing a free cell does nothing.
    pub fn release(&mut self, pos: Position) {
        self.cells.remove(&pos);
    }

    /// Sample random cells until a free one turns up
    ///
    /// The cell is not occupied here; the caller decides. There is no bound on
    /// the number of draws, so on a completely full board this never returns.
    pub fn random_free_cell<R: Rng>(&self, grid: &GridSpace, rng: &mut R) -> Position {
        loop {
            let pos = grid.random_cell(rng);
            if !self.is_occupied(pos) {
                return pos;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}
