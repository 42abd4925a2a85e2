//! Game state and core simulation types
//!
//! A run is reproducible from its `RngState` plus the inputs; the engine
//! reseeds it at every new game.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::square_to_cell;

/// A grid coordinate in board units (always a multiple of `GRID_UNIT`)
pub type Cell = IVec2;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The direction pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// One grid unit step in this direction (screen coords, +y is down)
    pub fn step(&self) -> Cell {
        match self {
            Direction::Left => IVec2::new(-GRID_UNIT, 0),
            Direction::Right => IVec2::new(GRID_UNIT, 0),
            Direction::Up => IVec2::new(0, -GRID_UNIT),
            Direction::Down => IVec2::new(0, GRID_UNIT),
        }
    }
}

/// One square of the snake body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeSegment {
    pub position: Cell,
    pub is_head: bool,
}

impl SnakeSegment {
    pub fn head(position: Cell) -> Self {
        Self {
            position,
            is_head: true,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game started yet
    Welcome,
    /// Snake is moving, the tick timer is armed
    Playing,
    /// Snake ran into itself; timer disarmed until the next new game
    GameOver,
}

/// Events queued for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Food was eaten; status readout changed
    FoodEaten { score: u32, speed_interval_ms: u32 },
    /// Run ended. `new_highscore` is true if the score makes the leaderboard
    GameOver { score: u32, new_highscore: bool },
}

/// Seed of the current run's food RNG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Fresh generator at the start of the run's sequence
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the current run was started with
    pub rng_state: RngState,
    /// Board size in board units
    pub board_width: i32,
    pub board_height: i32,
    /// Foods eaten this run
    pub score: u32,
    /// Current tick interval (ms)
    pub speed_interval_ms: u32,
    /// Tick interval every run starts at (ms)
    #[serde(default = "default_start_speed")]
    pub start_speed_ms: u32,
    pub direction: Direction,
    /// Body segments, oldest tail first, head last
    pub snake: Vec<SnakeSegment>,
    /// Target body length
    pub snake_length: usize,
    /// None only when the board has no free cell left
    pub food: Option<Cell>,
    pub phase: GamePhase,
}

impl GameState {
    /// Create a state in the welcome phase (no snake yet)
    pub fn new(seed: u64, board_width: i32, board_height: i32) -> Self {
        Self {
            rng_state: RngState::new(seed),
            board_width,
            board_height,
            score: 0,
            speed_interval_ms: SNAKE_START_SPEED_MS,
            start_speed_ms: SNAKE_START_SPEED_MS,
            direction: Direction::Right,
            snake: Vec::new(),
            snake_length: SNAKE_START_LENGTH,
            food: None,
            phase: GamePhase::Welcome,
        }
    }

    /// Reset everything except board size and seed for a fresh run
    pub fn reset(&mut self) {
        self.score = 0;
        self.speed_interval_ms = self.start_speed_ms;
        self.direction = Direction::Right;
        self.snake_length = SNAKE_START_LENGTH;
        self.snake.clear();
        self.snake.push(SnakeSegment::head(start_cell()));
        self.food = None;
        self.phase = GamePhase::Playing;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Current head position, if a snake exists
    pub fn head(&self) -> Option<Cell> {
        self.snake.last().map(|s| s.position)
    }

    /// Check if a cell is covered by any segment
    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.iter().any(|s| s.position == cell)
    }

    /// Board size in grid squares (columns, rows)
    pub fn grid_squares(&self) -> (i32, i32) {
        (self.board_width / GRID_UNIT, self.board_height / GRID_UNIT)
    }
}

fn default_start_speed() -> u32 {
    SNAKE_START_SPEED_MS
}

/// Where every new snake starts
pub fn start_cell() -> Cell {
    square_to_cell(SNAKE_START_SQUARE, SNAKE_START_SQUARE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_direction_step() {
        assert_eq!(Direction::Up.step(), IVec2::new(0, -20));
        assert_eq!(Direction::Down.step(), IVec2::new(0, 20));
        assert_eq!(Direction::Left.step(), IVec2::new(-20, 0));
        assert_eq!(Direction::Right.step(), IVec2::new(20, 0));
    }

    #[test]
    fn test_reset_places_single_head() {
        let mut state = GameState::new(7, BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(state.phase, GamePhase::Welcome);
        assert!(state.head().is_none());

        state.reset();
        assert!(state.is_running());
        assert_eq!(state.snake, vec![SnakeSegment::head(IVec2::new(100, 100))]);
        assert_eq!(state.snake_length, 3);
        assert_eq!(state.speed_interval_ms, 400);
    }

    #[test]
    fn test_state_serializes() {
        let mut state = GameState::new(99, BOARD_WIDTH, BOARD_HEIGHT);
        state.reset();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.snake, state.snake);
        assert_eq!(back.rng_state.seed, 99);
    }
}
