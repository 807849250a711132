use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Cells reserved for the snake's starting cell plus the apple and the poison
const RESERVED_CELLS: usize = 3;

/// Highest accepted tick rate
pub const MAX_TICK_RATE: u32 = 60;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,

    #[error("board {width}x{height} is not a positive multiple of cell size {cell_size}")]
    MisalignedBoard {
        width: i32,
        height: i32,
        cell_size: i32,
    },

    #[error("tick rate {0} is outside 1..=60")]
    TickRate(u32),

    #[error("stone range {min}..={max} is empty")]
    StoneRange { min: usize, max: usize },

    #[error("board has {cells} cells, not enough for {needed} objects")]
    BoardTooSmall { cells: usize, needed: usize },

    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the game, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: i32,
    /// Board height in pixels
    pub board_height: i32,
    /// Side of one square cell in pixels
    pub cell_size: i32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Fewest stones placed at the start of a game
    pub min_stones: usize,
    /// Most stones placed at the start of a game
    pub max_stones: usize,
    /// Seed for the game RNG; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 640,
            board_height: 480,
            cell_size: 20,
            tick_rate: 20,
            min_stones: 2,
            max_stones: 3,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size in pixels
    pub fn new(board_width: i32, board_height: i32, cell_size: i32) -> Self {
        Self {
            board_width,
            board_height,
            cell_size,
            ..Default::default()
        }
    }

    /// A 10x10 cell board for tests
    pub fn small() -> Self {
        Self::new(200, 200, 20)
    }

    /// Load a configuration from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        if self.board_width <= 0
            || self.board_height <= 0
            || self.board_width % self.cell_size != 0
            || self.board_height % self.cell_size != 0
        {
            return Err(ConfigError::MisalignedBoard {
                width: self.board_width,
                height: self.board_height,
                cell_size: self.cell_size,
            });
        }

        if self.tick_rate == 0 || self.tick_rate > MAX_TICK_RATE {
            return Err(ConfigError::TickRate(self.tick_rate));
        }

        if self.min_stones > self.max_stones {
            return Err(ConfigError::StoneRange {
                min: self.min_stones,
                max: self.max_stones,
            });
        }

        let cells = self.cell_count();
        let needed = self.max_stones + RESERVED_CELLS;
        if cells < needed {
            return Err(ConfigError::BoardTooSmall { cells, needed });
        }

        Ok(())
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        let columns = (self.board_width / self.cell_size.max(1)).max(0) as usize;
        let rows = (self.board_height / self.cell_size.max(1)).max(0) as usize;
        columns * rows
    }

    /// Wall-clock time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
