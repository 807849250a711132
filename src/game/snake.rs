use std::collections::VecDeque;

use super::action::Direction;
use super::grid::GridSpace;
use super::occupancy::OccupancyTracker;
use super::state::Position;

/// The player's snake
///
/// `length` is the target size. The body catches up with it on the next
/// move: it grows by not dropping the tail, and shrinks by dropping extra
/// tail cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    length: usize,
    /// Body segments, with head at the front
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
}

impl Snake {
    /// Create a snake with its head at `head`, extra segments trailing behind
    pub fn new(head: Position, direction: Direction, length: usize, grid: &GridSpace) -> Self {
        let length = length.max(1);
        let mut body = VecDeque::with_capacity(length);
        body.push_back(head);

        let back = direction.opposite();
        for _ in 1..length {
            let last = body[body.len() - 1];
            body.push_back(grid.step(last, back));
        }

        Self {
            length,
            body,
            direction,
            pending_direction: None,
        }
    }

    /// Create a snake from explicit segments, head first
    pub fn from_body(segments: Vec<Position>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            length: segments.len(),
            body: segments.into(),
            direction,
            pending_direction: None,
        })
    }

    /// Starting snake: one cell at the board center heading right, marked occupied
    pub fn spawn(grid: &GridSpace, occupancy: &mut OccupancyTracker) -> Self {
        let snake = Self::new(grid.center(), Direction::Right, 1, grid);
        occupancy.occupy(snake.head());
        snake
    }

    /// Queue a turn for the next tick. A reversal of the current heading is ignored.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Advance one cell and trim the tail down to `length`
    ///
    /// Returns the cells the tail vacated.
    pub fn move_forward(
        &mut self,
        grid: &GridSpace,
        occupancy: &mut OccupancyTracker,
    ) -> Vec<Position> {
        let new_head = grid.step(self.head(), self.direction);
        self.body.push_front(new_head);

        let mut vacated = Vec::new();
        while self.body.len() > self.length.max(1) {
            if let Some(tail) = self.body.pop_back() {
                occupancy.release(tail);
                if tail != new_head {
                    vacated.push(tail);
                }
            }
        }

        // The head may have moved onto the cell the tail just left
        occupancy.occupy(new_head);
        vacated
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// True if the head shares a cell with any other segment
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Drop one from the target length. Returns true once nothing is left.
    pub fn shrink(&mut self) -> bool {
        self.length = self.length.saturating_sub(1);
        self.length == 0
    }

    /// Free every body cell and start over at the board center
    ///
    /// Returns the cells released, minus the center cell which is taken again.
    pub fn reset(&mut self, grid: &GridSpace, occupancy: &mut OccupancyTracker) -> Vec<Position> {
        let center = grid.center();
        let mut released: Vec<Position> = Vec::with_capacity(self.body.len());
        for segment in self.body.drain(..) {
            occupancy.release(segment);
            if segment != center && !released.contains(&segment) {
                released.push(segment);
            }
        }

        *self = Self::spawn(grid, occupancy);
        released
    }

    /// Target length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of body segments right now
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
