//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One grid square per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the render hook

pub mod collision;
pub mod engine;
pub mod state;
pub mod tick;

pub use collision::{Collision, Edge};
pub use engine::GameEngine;
pub use state::{Cell, Direction, GameEvent, GamePhase, GameState, RngState, SnakeSegment};
pub use tick::{TickOutcome, eat_food, place_food, tick};
