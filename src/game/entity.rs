//! Point objects on the board: apples, poison and stones

use super::grid::GridSpace;
use super::occupancy::OccupancyTracker;
use super::state::Position;
use rand::Rng;

/// What an object on the board is, as far as drawing goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Apple,
    Poison,
    Stone,
}

/// Anything sitting on a single cell
pub trait Entity {
    fn position(&self) -> Position;
    fn kind(&self) -> EntityKind;
}

/// Effect a consumable has on the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumableKind {
    /// Apple: snake grows by one
    Growth,
    /// Poison: snake shrinks by one
    Shrink,
}

/// Apple or poison. Never leaves the board; it jumps to a fresh cell when eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumable {
    pub position: Position,
    pub kind: ConsumableKind,
}

impl Consumable {
    /// Drop a consumable onto a random free cell and occupy it
    pub fn spawn<R: Rng>(
        kind: ConsumableKind,
        grid: &GridSpace,
        occupancy: &mut OccupancyTracker,
        rng: &mut R,
    ) -> Self {
        let position = occupancy.random_free_cell(grid, rng);
        occupancy.occupy(position);
        Self { position, kind }
    }

    pub fn apple<R: Rng>(grid: &GridSpace, occupancy: &mut OccupancyTracker, rng: &mut R) -> Self {
        Self::spawn(ConsumableKind::Growth, grid, occupancy, rng)
    }

    pub fn poison<R: Rng>(grid: &GridSpace, occupancy: &mut OccupancyTracker, rng: &mut R) -> Self {
        Self::spawn(ConsumableKind::Shrink, grid, occupancy, rng)
    }

    /// Move to a new random free cell and occupy it
    ///
    /// The old cell is left as is: whoever ate the consumable now stands on it.
    pub fn relocate<R: Rng>(
        &mut self,
        grid: &GridSpace,
        occupancy: &mut OccupancyTracker,
        rng: &mut R,
    ) -> Position {
        let previous = self.position;
        self.position = occupancy.random_free_cell(grid, rng);
        occupancy.occupy(self.position);
        previous
    }
}

impl Entity for Consumable {
    fn position(&self) -> Position {
        self.position
    }

    fn kind(&self) -> EntityKind {
        match self.kind {
            ConsumableKind::Growth => EntityKind::Apple,
            ConsumableKind::Shrink => EntityKind::Poison,
        }
    }
}

/// Fixed obstacle, placed once per game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stone {
    position: Position,
}

impl Stone {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Place a stone on a random free cell and occupy it
    pub fn place<R: Rng>(grid: &GridSpace, occupancy: &mut OccupancyTracker, rng: &mut R) -> Self {
        let position = occupancy.random_free_cell(grid, rng);
        occupancy.occupy(position);
        Self { position }
    }
}

impl Entity for Stone {
    fn position(&self) -> Position {
        self.position
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Stone
    }
}
