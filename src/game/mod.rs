//! Core game logic module for Snake
//!
//! Everything here is free of I/O and rendering: the board geometry, the
//! occupancy index, the objects on the board, the snake and the tick rules.

pub mod action;
pub mod config;
pub mod engine;
pub mod entity;
pub mod grid;
pub mod occupancy;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, TickReport};
pub use entity::{Consumable, ConsumableKind, Entity, EntityKind, Stone};
pub use grid::GridSpace;
pub use occupancy::OccupancyTracker;
pub use snake::Snake;
pub use state::{GameState, Position, ResetCause};
