//! Display that only logs, for native runs without a window

use crate::game::{GameDisplay, Notice};
use crate::leaderboard::LeaderboardEntry;
use crate::sim::{GameState, Question};

#[derive(Debug, Default)]
pub struct LogDisplay {
    /// Frames drawn so far
    pub frames: u64,
    /// Last notification message
    pub last_notice: Option<String>,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameDisplay for LogDisplay {
    fn draw(&mut self, state: &GameState) {
        self.frames += 1;
        let head = state.snake.head();
        log::debug!(
            "frame {}: head ({}, {}) len {} apple ({}, {})",
            self.frames,
            head.x,
            head.y,
            state.snake.len(),
            state.apple.x,
            state.apple.y
        );
    }

    fn update_counters(&mut self, lives: u32, correct_answers: u32) {
        log::info!("Lives: {}  Correct answers: {}", lives, correct_answers);
    }

    fn show_question(&mut self, question: &Question) {
        log::info!("{}", question.text());
    }

    fn hide_question(&mut self) {}

    fn show_leaderboard(&mut self, entries: &[LeaderboardEntry]) {
        log::info!("Leaderboard:");
        for (i, entry) in entries.iter().enumerate() {
            log::info!("  {}. {}", i + 1, entry.display_line());
        }
    }

    fn set_session_active(&mut self, _active: bool) {}

    fn notify(&mut self, notice: &Notice) {
        let message = notice.to_string();
        log::info!("{}", message);
        self.last_notice = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_log_display_tracks_frames_and_notices() {
        let mut game = Game::new(11, LogDisplay::new(), MemoryStorage::new());
        game.start("Headless").unwrap();
        // Walk right into the wall from (5,5) on a 20-wide grid
        for _ in 0..40 {
            if game.state().is_paused() {
                let answer = game.state().question.as_ref().unwrap().answer();
                game.submit_answer(&answer.to_string());
            }
            if game.on_timer() == crate::game::LoopControl::Stop {
                break;
            }
        }
        assert!(game.state().is_game_over());
        assert!(game.display().frames > 0);
        assert!(
            game.display()
                .last_notice
                .as_deref()
                .unwrap()
                .starts_with("Game Over!")
        );
        assert_eq!(game.leaderboard().len(), 1);
    }
}
