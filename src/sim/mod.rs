//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod grid;
pub mod quiz;
pub mod score;
pub mod snake;
pub mod state;
pub mod tick;

pub use grid::{Cell, Grid};
pub use quiz::{Operator, Question, parse_answer};
pub use score::ScoreLedger;
pub use snake::{Direction, Snake};
pub use state::{GameEvent, GameOverCause, GamePhase, GameState};
pub use tick::{AnswerOutcome, submit_answer, tick};
