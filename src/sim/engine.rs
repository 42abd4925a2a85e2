//! Game engine: owns the state, the seeded RNG and the hooks to the outside
//!
//! The presentation layer drives it with `tick` (from its timer) and
//! `handle_command` (from input), and reads back status and events.

use std::time::Duration;

use log::info;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Direction, GameEvent, GamePhase, GameState, RngState};
use super::tick::{TickOutcome, place_food, tick};
use crate::highscores::{HighScoreEntry, HighScores};
use crate::platform::InputCommand;
use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;

pub struct GameEngine {
    state: GameState,
    /// Hands out one seed per run
    seeds: Pcg32,
    /// Food RNG of the current run, seeded from `state.rng_state`
    rng: Pcg32,
    highscores: HighScores,
    /// The finished run is already on the leaderboard
    recorded: bool,
    events: Vec<GameEvent>,
    renderer: Option<Box<dyn Renderer>>,
}

impl GameEngine {
    /// Engine for the board described by `settings`, with an empty leaderboard
    pub fn new(settings: &Settings) -> Self {
        let (width, height) = settings.board_size();
        let mut engine = Self::with_seed(settings.seed, width, height);
        engine.state.start_speed_ms = settings.start_speed();
        engine.state.speed_interval_ms = engine.state.start_speed_ms;
        engine
    }

    /// Engine with an explicit seed and board size (board units)
    pub fn with_seed(seed: u64, board_width: i32, board_height: i32) -> Self {
        let state = GameState::new(seed, board_width, board_height);
        let rng = state.rng_state.to_rng();
        Self {
            state,
            seeds: Pcg32::seed_from_u64(seed),
            rng,
            highscores: HighScores::new(),
            recorded: false,
            events: Vec::new(),
            renderer: None,
        }
    }

    /// Attach the leaderboard used for game-over qualification
    pub fn with_highscores(mut self, highscores: HighScores) -> Self {
        self.highscores = highscores;
        self
    }

    /// Attach the render hook, called after every state change
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
    }

    /// Reset score, speed and snake, spawn food and start running
    pub fn start_new_game(&mut self) {
        self.state.reset();
        self.state.rng_state = RngState::new(self.seeds.next_u64());
        self.rng = self.state.rng_state.to_rng();
        self.recorded = false;
        self.state.food = place_food(&self.state, &mut self.rng);
        self.events.clear();
        info!(
            "New game: board {}x{}, interval {}ms",
            self.state.board_width, self.state.board_height, self.state.speed_interval_ms
        );
        self.redraw();
    }

    /// Turn the snake. Reversals and no-op turns are ignored; an accepted turn
    /// advances the snake one square immediately. Returns true if it turned.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if !self.state.is_running()
            || direction == self.state.direction
            || self.state.direction.is_opposite(direction)
        {
            return false;
        }
        self.state.direction = direction;
        self.tick();
        true
    }

    /// Advance one step (timer pulse)
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = tick(&mut self.state, &mut self.rng);
        match outcome {
            TickOutcome::Idle => return outcome,
            TickOutcome::AteFood => self.events.push(GameEvent::FoodEaten {
                score: self.state.score,
                speed_interval_ms: self.state.speed_interval_ms,
            }),
            TickOutcome::SelfHit => self.end_game(),
            TickOutcome::Moved { .. } => {}
        }
        self.redraw();
        outcome
    }

    /// Map a decoded input command onto the engine
    pub fn handle_command(&mut self, command: InputCommand) {
        match command {
            InputCommand::NewGame => self.start_new_game(),
            InputCommand::Up => {
                self.change_direction(Direction::Up);
            }
            InputCommand::Down => {
                self.change_direction(Direction::Down);
            }
            InputCommand::Left => {
                self.change_direction(Direction::Left);
            }
            InputCommand::Right => {
                self.change_direction(Direction::Right);
            }
        }
    }

    /// Stop the run and report whether the score makes the leaderboard
    pub fn end_game(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        self.state.phase = GamePhase::GameOver;
        let score = self.state.score;
        let new_highscore = self.highscores.qualifies(score);
        info!("Game over: score {score}, new highscore: {new_highscore}");
        self.events.push(GameEvent::GameOver {
            score,
            new_highscore,
        });
    }

    /// Enter the finished run on the leaderboard, once. Returns the 1-based
    /// rank, or None if the run is still going, was already entered, or the
    /// score does not qualify.
    pub fn record_highscore(&mut self, player_name: &str) -> Option<usize> {
        if self.state.phase != GamePhase::GameOver
            || self.recorded
            || !self.highscores.qualifies(self.state.score)
        {
            return None;
        }
        self.recorded = true;
        self.highscores
            .insert(HighScoreEntry::new(player_name, self.state.score))
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn speed_interval_ms(&self) -> u32 {
        self.state.speed_interval_ms
    }

    /// How long the timer should wait before the next tick; None while the
    /// timer is disarmed (before the first game and after game over)
    pub fn tick_interval(&self) -> Option<Duration> {
        self.is_running()
            .then(|| Duration::from_millis(u64::from(self.state.speed_interval_ms)))
    }

    fn redraw(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&Frame::from_state(&self.state));
        }
    }
}
