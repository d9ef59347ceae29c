//! Session driver
//!
//! Owns the simulation state, the leaderboard and storage, and routes the
//! external triggers (timer, direction keys, answer submit, start, restart)
//! into the simulation. All UI goes through [`GameDisplay`].

use std::fmt;

use thiserror::Error;

use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::persistence::Storage;
use crate::settings::Settings;
use crate::sim::{
    AnswerOutcome, Direction, GameEvent, GameOverCause, GameState, Question, submit_answer, tick,
};

/// Rendering and notification capability
pub trait GameDisplay {
    /// Clear and redraw the playfield
    fn draw(&mut self, state: &GameState);
    fn update_counters(&mut self, lives: u32, correct_answers: u32);
    fn show_question(&mut self, question: &Question);
    fn hide_question(&mut self);
    /// Show the ranked entries (already cut to the display size)
    fn show_leaderboard(&mut self, entries: &[LeaderboardEntry]);
    /// Toggle between playing (name entry, leaderboard and restart hidden)
    /// and finished (restart and leaderboard shown)
    fn set_session_active(&mut self, active: bool);
    /// Modal notification
    fn notify(&mut self, notice: &Notice);
}

/// Notifications shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NameRequired,
    WrongAnswer,
    GameOver { correct_answers: u32 },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NameRequired => f.write_str("Please enter your name to start the game."),
            Notice::WrongAnswer => f.write_str("Wrong answer! You lost a life."),
            Notice::GameOver { correct_answers } => {
                write!(f, "Game Over! You got {} correct answers.", correct_answers)
            }
        }
    }
}

/// Whether the periodic timer should keep firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("a session is already in progress")]
    AlreadyStarted,
    #[error("there is no finished session to restart")]
    NoSessionToRestart,
}

/// A game session bound to a display and a store
pub struct Game<D: GameDisplay, S: Storage> {
    state: GameState,
    leaderboard: Leaderboard,
    settings: Settings,
    player_name: Option<String>,
    display: D,
    storage: S,
}

impl<D: GameDisplay, S: Storage> Game<D, S> {
    /// Load settings and leaderboard from `storage` and prepare an idle game
    pub fn new(seed: u64, display: D, mut storage: S) -> Self {
        let settings = Settings::load_or_init(&mut storage);
        let leaderboard = Leaderboard::load(&storage);
        let state = GameState::new(seed, settings.grid());
        Self {
            state,
            leaderboard,
            settings,
            player_name: None,
            display,
            storage,
        }
    }

    /// Begin the first session for `name`
    pub fn start(&mut self, name: &str) -> Result<LoopControl, GameError> {
        let name = name.trim();
        if name.is_empty() {
            self.display.notify(&Notice::NameRequired);
            return Err(GameError::EmptyName);
        }
        if !self.state.start() {
            return Err(GameError::AlreadyStarted);
        }

        self.player_name = Some(name.to_string());
        self.display.set_session_active(true);
        self.refresh_counters();
        log::info!("Session started for {} (seed {})", name, self.state.seed);
        Ok(LoopControl::Continue)
    }

    /// Start over after a game over, keeping the player name
    pub fn restart(&mut self) -> Result<LoopControl, GameError> {
        if !self.state.is_game_over() {
            return Err(GameError::NoSessionToRestart);
        }

        self.state.restart();
        self.display.hide_question();
        self.display.set_session_active(true);
        self.refresh_counters();
        log::info!("Session restarted");
        Ok(LoopControl::Continue)
    }

    /// Buffer a direction key press
    pub fn on_direction(&mut self, direction: Direction) {
        if !self.state.steer(direction) {
            log::debug!("Ignored reversal toward {:?}", direction);
        }
    }

    /// One timer period elapsed
    pub fn on_timer(&mut self) -> LoopControl {
        if self.state.is_game_over() {
            return LoopControl::Stop;
        }
        if !self.state.is_running() {
            return LoopControl::Continue;
        }

        self.display.draw(&self.state);
        for event in tick(&mut self.state) {
            match event {
                GameEvent::AppleEaten { at } => {
                    log::debug!("Apple eaten at ({}, {})", at.x, at.y);
                }
                GameEvent::QuestionAsked => {
                    if let Some(question) = &self.state.question {
                        self.display.show_question(question);
                    }
                }
                GameEvent::GameOver(cause) => {
                    self.finish(cause);
                    return LoopControl::Stop;
                }
            }
        }
        LoopControl::Continue
    }

    /// Answer the pending question with raw player input
    pub fn submit_answer(&mut self, raw: &str) -> AnswerOutcome {
        let outcome = submit_answer(&mut self.state, raw);
        match outcome {
            AnswerOutcome::NoQuestion => {}
            AnswerOutcome::Correct => {
                self.refresh_counters();
                self.display.hide_question();
            }
            AnswerOutcome::Wrong { .. } => {
                self.refresh_counters();
                self.display.notify(&Notice::WrongAnswer);
            }
            AnswerOutcome::OutOfLives => {
                self.refresh_counters();
                self.display.hide_question();
                self.finish(GameOverCause::OutOfLives);
            }
        }
        outcome
    }

    fn refresh_counters(&mut self) {
        let score = self.state.score;
        self.display
            .update_counters(score.lives, score.correct_answers);
    }

    /// Record the run, persist the leaderboard and show the results
    fn finish(&mut self, cause: GameOverCause) {
        let correct_answers = self.state.score.correct_answers;
        log::info!(
            "Game over ({:?}) with {} correct answers",
            cause,
            correct_answers
        );
        self.display.notify(&Notice::GameOver { correct_answers });

        let name = self.player_name.clone().unwrap_or_default();
        let rank = self.leaderboard.record(name, correct_answers);
        log::info!("Ranked #{} of {}", rank, self.leaderboard.len());
        if let Err(e) = self.leaderboard.save(&mut self.storage) {
            log::warn!("Failed to save leaderboard: {}", e);
        }

        self.display
            .show_leaderboard(self.leaderboard.top(self.settings.leaderboard_display));
        self.display.set_session_active(false);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
