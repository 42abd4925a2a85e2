//! Rendering module
//!
//! The simulation hands a read-only `Frame` to a `Renderer` after every state
//! change. Renderers keep no game state of their own.

pub mod text;

pub use text::TextRenderer;

use crate::sim::{Cell, GameState, SnakeSegment};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Oldest tail first, head last
    pub segments: &'a [SnakeSegment],
    pub food: Option<Cell>,
    pub score: u32,
    pub speed_interval_ms: u32,
    pub board_width: i32,
    pub board_height: i32,
}

impl<'a> Frame<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            segments: &state.snake,
            food: state.food,
            score: state.score,
            speed_interval_ms: state.speed_interval_ms,
            board_width: state.board_width,
            board_height: state.board_height,
        }
    }
}

/// Render hook
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}
