//! Game state and core simulation types
//!
//! Everything the loop mutates lives in [`GameState`]; nothing is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};
use super::quiz::Question;
use super::score::ScoreLedger;
use super::snake::{Direction, Snake};
use crate::consts::SNAKE_START;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to enter a name
    Idle,
    /// Snake is moving
    Running,
    /// A question is pending; ticks are no-ops
    Paused,
    /// Run ended (wall, self collision or out of lives)
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    HitWall,
    HitSelf,
    OutOfLives,
}

/// Things that happened during a tick, for the session driver to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AppleEaten { at: Cell },
    QuestionAsked,
    GameOver(GameOverCause),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Cell,
    /// Heading used by the last move
    pub heading: Direction,
    /// Heading to use on the next move
    pub pending_direction: Direction,
    pub score: ScoreLedger,
    pub phase: GamePhase,
    /// Question awaiting an answer (only while paused)
    pub question: Option<Question>,
    /// Simulation tick counter (running ticks only)
    pub time_ticks: u64,
}

impl GameState {
    /// Create an idle game on `grid` with the given seed
    pub fn new(seed: u64, grid: Grid) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let apple = grid.random_cell(&mut rng);
        Self {
            seed,
            rng,
            grid,
            snake: Snake::new(SNAKE_START),
            apple,
            heading: Direction::Right,
            pending_direction: Direction::Right,
            score: ScoreLedger::default(),
            phase: GamePhase::Idle,
            question: None,
            time_ticks: 0,
        }
    }

    /// Leave `Idle` and start moving. Returns `false` if already started.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.phase = GamePhase::Running;
        true
    }

    /// Reset the session in place and start running again.
    ///
    /// The RNG stream continues so consecutive runs get fresh apples.
    pub fn restart(&mut self) {
        self.snake = Snake::new(SNAKE_START);
        self.apple = self.grid.random_cell(&mut self.rng);
        self.heading = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = ScoreLedger::default();
        self.question = None;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
    }

    /// Buffer a direction change for the next move.
    ///
    /// A reversal of the current heading is rejected and returns `false`.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.heading.opposite() {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub(super) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub(super) fn end(&mut self) {
        self.phase = GamePhase::GameOver;
        self.question = None;
    }
}
