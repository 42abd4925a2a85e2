//! Collision classification and screen-wrap geometry
//!
//! The board is a torus: leaving one edge re-enters from the opposite one.
//! Walls never kill; only running into your own body does.

use super::state::{Cell, GameState};

/// What the freshly placed head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Free cell (or food, which is handled by the caller)
    None,
    /// Head is on the food cell
    Food,
    /// Head left the playfield and must be wrapped
    BoundaryCrossing,
    /// Head overlaps a non-head segment
    SelfHit,
}

/// Which edge the head left through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    North,
    South,
    West,
    East,
}

/// Classify the head cell. Checks run food, boundary, body in that order, so
/// food sitting next to an edge is always eaten first.
pub fn check(state: &GameState, head: Cell) -> Collision {
    if state.food == Some(head) {
        return Collision::Food;
    }

    if exited_edge(head, state.board_width, state.board_height).is_some() {
        return Collision::BoundaryCrossing;
    }

    if hits_body(state, head) {
        return Collision::SelfHit;
    }

    Collision::None
}

/// True if `head` overlaps any segment except the last (the head itself)
pub fn hits_body(state: &GameState, head: Cell) -> bool {
    let body_len = state.snake.len().saturating_sub(1);
    state.snake[..body_len].iter().any(|s| s.position == head)
}

/// The edge a cell is beyond, if any. North/south are checked first; a single
/// step can only ever cross one edge.
pub fn exited_edge(cell: Cell, board_width: i32, board_height: i32) -> Option<Edge> {
    if cell.y < 0 {
        Some(Edge::North)
    } else if cell.y >= board_height {
        Some(Edge::South)
    } else if cell.x < 0 {
        Some(Edge::West)
    } else if cell.x >= board_width {
        Some(Edge::East)
    } else {
        None
    }
}

/// Move a cell that left the board to the opposite edge. Exactly one axis is
/// shifted, by the full board dimension.
pub fn wrap(cell: Cell, board_width: i32, board_height: i32) -> Cell {
    let mut wrapped = cell;
    match exited_edge(cell, board_width, board_height) {
        Some(Edge::North) => wrapped.y += board_height,
        Some(Edge::South) => wrapped.y -= board_height,
        Some(Edge::West) => wrapped.x += board_width,
        Some(Edge::East) => wrapped.x -= board_width,
        None => {}
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SnakeSegment;
    use glam::IVec2;

    fn state_with(body: &[(i32, i32)], food: Option<(i32, i32)>) -> GameState {
        let mut state = GameState::new(1, 400, 400);
        state.reset();
        state.snake = body
            .iter()
            .map(|&(x, y)| SnakeSegment {
                position: IVec2::new(x, y),
                is_head: false,
            })
            .collect();
        if let Some(last) = state.snake.last_mut() {
            last.is_head = true;
        }
        state.food = food.map(|(x, y)| IVec2::new(x, y));
        state
    }

    #[test]
    fn test_food_wins() {
        let state = state_with(&[(80, 100), (100, 100)], Some((100, 100)));
        assert_eq!(check(&state, IVec2::new(100, 100)), Collision::Food);
    }

    #[test]
    fn test_boundary_crossing() {
        let state = state_with(&[(0, 100)], Some((200, 200)));
        assert_eq!(check(&state, IVec2::new(-20, 100)), Collision::BoundaryCrossing);
        assert_eq!(check(&state, IVec2::new(400, 100)), Collision::BoundaryCrossing);
        assert_eq!(check(&state, IVec2::new(100, -20)), Collision::BoundaryCrossing);
        assert_eq!(check(&state, IVec2::new(100, 400)), Collision::BoundaryCrossing);
        // Edge squares are still on the board
        assert_eq!(check(&state, IVec2::new(0, 380)), Collision::None);
    }

    #[test]
    fn test_self_hit_ignores_head() {
        let state = state_with(&[(100, 100), (120, 100), (120, 120)], None);
        assert_eq!(check(&state, IVec2::new(100, 100)), Collision::SelfHit);
        assert_eq!(check(&state, IVec2::new(120, 120)), Collision::None);
    }

    #[test]
    fn test_wrap_each_edge() {
        assert_eq!(wrap(IVec2::new(-20, 60), 400, 300), IVec2::new(380, 60));
        assert_eq!(wrap(IVec2::new(400, 60), 400, 300), IVec2::new(0, 60));
        assert_eq!(wrap(IVec2::new(60, -20), 400, 300), IVec2::new(60, 280));
        assert_eq!(wrap(IVec2::new(60, 300), 400, 300), IVec2::new(60, 0));
        assert_eq!(wrap(IVec2::new(60, 60), 400, 300), IVec2::new(60, 60));
    }
}
