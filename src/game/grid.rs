//! Toroidal board geometry
//!
//! Positions are kept in pixel units, always a multiple of the cell size.
//! Every coordinate that leaves the board re-enters on the opposite edge.

use super::action::Direction;
use super::config::GameConfig;
use super::state::Position;
use rand::Rng;

/// Fixed-size wrapping grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpace {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl GridSpace {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_width, config.board_height, config.cell_size)
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Wrap a position back onto the board, however far out of range it is
    pub fn normalize(&self, pos: Position) -> Position {
        Position::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// True if the position lies on the board and on a cell boundary
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x)
            && (0..self.height).contains(&pos.y)
            && pos.x % self.cell_size == 0
            && pos.y % self.cell_size == 0
    }

    /// Top-left corner of the cell at (column, row)
    pub fn cell_at(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell_size, row * self.cell_size)
    }

    /// Column and row of a position
    pub fn to_cell(&self, pos: Position) -> (i32, i32) {
        (pos.x / self.cell_size, pos.y / self.cell_size)
    }

    /// Cell in the middle of the board
    pub fn center(&self) -> Position {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    /// Neighbouring cell one step in a direction, wrapped
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.normalize(pos.moved_by(dx * self.cell_size, dy * self.cell_size))
    }

    /// Uniformly random cell
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        let column = rng.gen_range(0..self.columns());
        let row = rng.gen_range(0..self.rows());
        self.cell_at(column, row)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |column| self.cell_at(column, row)))
    }
}
