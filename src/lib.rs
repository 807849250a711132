//! Snake Arcade - single-player Snake on a wrapping board
//!
//! This library provides:
//! - Core simulation: board geometry, occupancy, snake, apples, poison, stones (game module)
//! - Terminal rendering and key mapping (render, input modules)
//! - Interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
