//! Fixed-step simulation tick
//!
//! One call advances the snake by exactly one grid square.

use log::{debug, warn};
use rand::Rng;

use super::collision::{self, Collision};
use super::state::{Cell, GameState, SnakeSegment};
use crate::consts::*;
use crate::square_to_cell;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game not running, nothing moved
    Idle,
    /// Snake advanced; `wrapped` if the head re-entered from the opposite edge
    Moved { wrapped: bool },
    /// Snake advanced onto the food and ate it
    AteFood,
    /// Head landed on the body; the caller must end the game
    SelfHit,
}

/// Advance the game state by one step
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R) -> TickOutcome {
    if !state.is_running() {
        return TickOutcome::Idle;
    }
    let Some(head) = state.head() else {
        return TickOutcome::Idle;
    };

    // Make room for the new head; normally drops exactly the tail
    while !state.snake.is_empty() && state.snake.len() >= state.snake_length {
        state.snake.remove(0);
    }

    for segment in &mut state.snake {
        segment.is_head = false;
    }

    let new_head = head + state.direction.step();
    state.snake.push(SnakeSegment::head(new_head));

    match collision::check(state, new_head) {
        Collision::Food => {
            eat_food(state, rng);
            TickOutcome::AteFood
        }
        Collision::SelfHit => TickOutcome::SelfHit,
        Collision::None => TickOutcome::Moved { wrapped: false },
        Collision::BoundaryCrossing => {
            let wrapped = collision::wrap(new_head, state.board_width, state.board_height);
            if let Some(last) = state.snake.last_mut() {
                last.position = wrapped;
            }
            // The re-entry square can hold food or body too
            match collision::check(state, wrapped) {
                Collision::Food => {
                    eat_food(state, rng);
                    TickOutcome::AteFood
                }
                Collision::SelfHit => TickOutcome::SelfHit,
                _ => TickOutcome::Moved { wrapped: true },
            }
        }
    }
}

/// Grow, score, speed up and respawn the food
pub fn eat_food<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.snake_length += 1;
    state.score += 1;
    state.speed_interval_ms = state
        .speed_interval_ms
        .saturating_sub(state.score * 2)
        .max(SNAKE_SPEED_FLOOR_MS);
    state.food = place_food(state, rng);

    debug!(
        "Food eaten: score={} length={} interval={}ms",
        state.score, state.snake_length, state.speed_interval_ms
    );
}

/// Pick a random free square. Tries uniform random draws first, then falls
/// back to choosing among the remaining free squares. Returns None only if
/// the snake covers the whole board.
pub fn place_food<R: Rng>(state: &GameState, rng: &mut R) -> Option<Cell> {
    let (cols, rows) = state.grid_squares();
    if cols <= 0 || rows <= 0 {
        warn!("Board has no squares, cannot place food");
        return None;
    }

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let cell = square_to_cell(rng.random_range(0..cols), rng.random_range(0..rows));
        if !state.is_occupied_by_snake(cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| square_to_cell(col, row)))
        .filter(|&cell| !state.is_occupied_by_snake(cell))
        .collect();

    if free.is_empty() {
        warn!("Board is full, no food spawned");
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}
