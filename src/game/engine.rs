use super::{
    action::Action,
    config::GameConfig,
    entity::{Consumable, Stone},
    grid::GridSpace,
    occupancy::OccupancyTracker,
    snake::Snake,
    state::{GameState, Position, ResetCause},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The head landed on the apple
    pub ate_apple: bool,
    /// The head landed on the poison
    pub ate_poison: bool,
    /// Set when the snake was sent back to the center this tick
    pub reset: Option<ResetCause>,
    /// Cells the snake left this tick, for erase-only redraws
    pub vacated: Vec<Position>,
}

/// Runs the rules of the game, one tick at a time
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    grid: GridSpace,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            grid: GridSpace::from_config(&config),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridSpace {
        &self.grid
    }

    /// Lay out a fresh board: snake at the center, then stones, apple and poison
    pub fn new_game(&mut self) -> GameState {
        let grid = self.grid;
        let mut occupancy = OccupancyTracker::new();

        let snake = Snake::spawn(&grid, &mut occupancy);

        let stone_count = self
            .rng
            .gen_range(self.config.min_stones..=self.config.max_stones);
        let stones: Vec<Stone> = (0..stone_count)
            .map(|_| Stone::place(&grid, &mut occupancy, &mut self.rng))
            .collect();

        let apple = Consumable::apple(&grid, &mut occupancy, &mut self.rng);
        let poison = Consumable::poison(&grid, &mut occupancy, &mut self.rng);

        info!(
            stones = stones.len(),
            apple = ?apple.position,
            poison = ?poison.position,
            "new game"
        );

        GameState {
            grid,
            snake,
            apple,
            poison,
            stones,
            occupancy,
            ticks: 0,
            resets: 0,
        }
    }

    /// Advance the game by one tick
    ///
    /// Turn, move, eat, then check collisions. Eating happens first, so a
    /// snake that grows onto a stone still crashes on the same tick.
    pub fn tick(&mut self, state: &mut GameState, action: Action) -> TickReport {
        if let Action::Move(direction) = action {
            state.snake.buffer_direction(direction);
        }
        state.snake.apply_pending_direction();

        let mut report = TickReport {
            vacated: state.snake.move_forward(&state.grid, &mut state.occupancy),
            ..Default::default()
        };
        state.reclaim_fixed_cells();

        // The head keeps the cell of whatever it eats; only the new spot is taken
        if state.snake.head() == state.apple.position {
            report.ate_apple = true;
            state.snake.grow();
            let eaten_at = state
                .apple
                .relocate(&state.grid, &mut state.occupancy, &mut self.rng);
            debug!(
                at = ?eaten_at,
                length = state.snake.length(),
                respawn = ?state.apple.position,
                "apple eaten"
            );
        }

        if state.snake.head() == state.poison.position {
            report.ate_poison = true;
            if state.snake.shrink() {
                self.reset_snake(state, ResetCause::Starved, &mut report);
            }
            let eaten_at = state
                .poison
                .relocate(&state.grid, &mut state.occupancy, &mut self.rng);
            debug!(
                at = ?eaten_at,
                length = state.snake.length(),
                respawn = ?state.poison.position,
                "poison eaten"
            );
        }

        if state.snake.self_collision() {
            self.reset_snake(state, ResetCause::SelfCollision, &mut report);
        }

        if state.stone_at(state.snake.head()) {
            self.reset_snake(state, ResetCause::Stone, &mut report);
        }

        // Later steps may have put the head or a consumable back on a freed cell
        report
            .vacated
            .retain(|cell| !state.occupancy.is_occupied(*cell));

        state.ticks += 1;
        trace!(tick = state.ticks, head = ?state.snake.head(), "tick");

        report
    }

    fn reset_snake(&mut self, state: &mut GameState, cause: ResetCause, report: &mut TickReport) {
        let length = state.snake.length();
        let released = state.snake.reset(&state.grid, &mut state.occupancy);
        state.reclaim_fixed_cells();
        state.resets += 1;

        for cell in released {
            if !report.vacated.contains(&cell) {
                report.vacated.push(cell);
            }
        }
        report.reset = Some(cause);

        info!(?cause, length, resets = state.resets, "snake reset");
    }
}
