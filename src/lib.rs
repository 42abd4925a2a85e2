//! Wrap Snake - a grid snake game with screen-wrap traversal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake movement, collisions, food)
//! - `highscores`: Top-5 leaderboard
//! - `persistence`: JSON save/load with corruption recovery
//! - `settings`: Board and speed configuration
//! - `renderer`: Render hook and a plain-text projection
//! - `platform`: Input decoding

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::{HighScoreEntry, HighScores};
pub use settings::Settings;
pub use sim::{Direction, GameEngine, GameEvent};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Size of one grid square in board units (one movement step)
    pub const GRID_UNIT: i32 = 20;

    /// Default board dimensions in board units (20 x 20 squares)
    pub const BOARD_WIDTH: i32 = 400;
    pub const BOARD_HEIGHT: i32 = 400;

    /// Snake defaults
    pub const SNAKE_START_LENGTH: usize = 3;
    /// Start cell is (5, 5) in grid squares
    pub const SNAKE_START_SQUARE: i32 = 5;

    /// Tick interval at the start of a game (ms)
    pub const SNAKE_START_SPEED_MS: u32 = 400;
    /// Tick interval never drops below this (ms)
    pub const SNAKE_SPEED_FLOOR_MS: u32 = 10;

    /// Random draws before food placement falls back to scanning
    pub const MAX_FOOD_ATTEMPTS: u32 = 1000;
}

/// Snap a board coordinate down to its grid square origin
#[inline]
pub fn snap_to_grid(pos: IVec2) -> IVec2 {
    let unit = consts::GRID_UNIT;
    IVec2::new(pos.x.div_euclid(unit) * unit, pos.y.div_euclid(unit) * unit)
}

/// Convert a grid square index to board units
#[inline]
pub fn square_to_cell(col: i32, row: i32) -> IVec2 {
    IVec2::new(col * consts::GRID_UNIT, row * consts::GRID_UNIT)
}

/// Convert board units to a grid square index
#[inline]
pub fn cell_to_square(cell: IVec2) -> (i32, i32) {
    (
        cell.x.div_euclid(consts::GRID_UNIT),
        cell.y.div_euclid(consts::GRID_UNIT),
    )
}
