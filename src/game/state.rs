use super::entity::{Consumable, Entity, Stone};
use super::grid::GridSpace;
use super::occupancy::OccupancyTracker;
use super::snake::Snake;

/// Top-left corner of a cell on the board, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Why the snake was sent back to the center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// Poison ate the last segment
    Starved,
    /// Head ran into the body
    SelfCollision,
    /// Head ran into a stone
    Stone,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: GridSpace,
    pub snake: Snake,
    pub apple: Consumable,
    pub poison: Consumable,
    pub stones: Vec<Stone>,
    pub occupancy: OccupancyTracker,
    pub ticks: u64,
    pub resets: u32,
}

impl GameState {
    /// True if any stone occupies the cell
    pub fn stone_at(&self, pos: Position) -> bool {
        self.stones.iter().any(|stone| stone.position() == pos)
    }

    /// Apple, poison and stones, in drawing order
    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> {
        [&self.apple as &dyn Entity, &self.poison as &dyn Entity]
            .into_iter()
            .chain(self.stones.iter().map(|stone| stone as &dyn Entity))
    }

    /// Swap in another snake, moving its cells in the occupancy index
    pub fn place_snake(&mut self, snake: Snake) {
        for segment in self.snake.segments() {
            self.occupancy.release(*segment);
        }
        for segment in snake.segments() {
            self.occupancy.occupy(*segment);
        }
        self.snake = snake;
    }

    /// Put the apple on a given cell
    pub fn place_apple(&mut self, pos: Position) {
        self.occupancy.release(self.apple.position);
        self.apple.position = pos;
        self.occupancy.occupy(pos);
    }

    /// Put the poison on a given cell
    pub fn place_poison(&mut self, pos: Position) {
        self.occupancy.release(self.poison.position);
        self.poison.position = pos;
        self.occupancy.occupy(pos);
    }

    /// Re-mark the cells of the apple, the poison and the stones
    ///
    /// The snake releases cells it shares with these objects in two cases.
    /// A reset puts the snake back on the center cell, and a consumable may
    /// already sit there; the next move frees the center along with the
    /// consumable's claim on it. A crash into a stone leaves the head on the
    /// stone's cell, and the reset frees that cell with the rest of the body.
    pub(crate) fn reclaim_fixed_cells(&mut self) {
        self.occupancy.occupy(self.apple.position);
        self.occupancy.occupy(self.poison.position);
        for stone in &self.stones {
            self.occupancy.occupy(stone.position());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crate::game::entity::{ConsumableKind, EntityKind};

    fn state() -> GameState {
        let grid = GridSpace::new(200, 200, 20);
        let mut occupancy = OccupancyTracker::new();
        let snake = Snake::spawn(&grid, &mut occupancy);
        let apple = Consumable {
            position: Position::new(0, 0),
            kind: ConsumableKind::Growth,
        };
        let poison = Consumable {
            position: Position::new(20, 0),
            kind: ConsumableKind::Shrink,
        };
        let stones = vec![Stone::new(Position::new(40, 0))];
        let mut state = GameState {
            grid,
            snake,
            apple,
            poison,
            stones,
            occupancy,
            ticks: 0,
            resets: 0,
        };
        state.reclaim_fixed_cells();
        state
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(40, 40);
        assert_eq!(pos.moved_by(20, 0), Position::new(60, 40));
        assert_eq!(pos.moved_by(0, -20), Position::new(40, 20));
    }

    #[test]
    fn test_entities_in_order() {
        let state = state();
        let kinds: Vec<_> = state.entities().map(|entity| entity.kind()).collect();
        assert_eq!(
            kinds,
            vec![EntityKind::Apple, EntityKind::Poison, EntityKind::Stone]
        );
        assert!(state.stone_at(Position::new(40, 0)));
        assert!(!state.stone_at(Position::new(60, 0)));
    }

    #[test]
    fn test_place_snake_moves_occupancy() {
        let mut state = state();
        let center = state.grid.center();
        let snake = Snake::new(Position::new(60, 60), Direction::Up, 2, &state.grid);

        state.place_snake(snake);
        assert!(!state.occupancy.is_occupied(center));
        assert!(state.occupancy.is_occupied(Position::new(60, 60)));
        assert!(state.occupancy.is_occupied(Position::new(60, 80)));
    }

    #[test]
    fn test_place_apple_moves_occupancy() {
        let mut state = state();
        state.place_apple(Position::new(80, 80));
        assert!(!state.occupancy.is_occupied(Position::new(0, 0)));
        assert!(state.occupancy.is_occupied(Position::new(80, 80)));
        assert_eq!(state.occupancy.len(), 4);
    }

    #[test]
    fn test_reclaim_after_leaving_center_consumable() {
        let mut state = state();
        let center = state.grid.center();
        let snake = Snake::new(Position::new(60, 60), Direction::Up, 1, &state.grid);
        state.place_snake(snake);
        state.place_apple(center);

        state.snake.reset(&state.grid, &mut state.occupancy);
        state.snake.move_forward(&state.grid, &mut state.occupancy);
        assert!(!state.occupancy.is_occupied(center));

        state.reclaim_fixed_cells();
        assert!(state.occupancy.is_occupied(center));
    }

    #[test]
    fn test_reclaim_after_stone_crash() {
        let mut state = state();
        let stone = Position::new(40, 0);
        let snake = Snake::new(stone, Direction::Right, 1, &state.grid);
        state.place_snake(snake);

        state.snake.reset(&state.grid, &mut state.occupancy);
        assert!(!state.occupancy.is_occupied(stone));

        state.reclaim_fixed_cells();
        assert!(state.occupancy.is_occupied(stone));
    }
}
