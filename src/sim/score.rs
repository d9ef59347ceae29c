//! Per-session score ledger: lives, correct answers and question difficulty

use serde::{Deserialize, Serialize};

use crate::consts::{START_DIFFICULTY, START_LIVES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    pub lives: u32,
    pub correct_answers: u32,
    /// Scales addition/subtraction operand ranges (starts at 1)
    pub difficulty: u32,
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self {
            lives: START_LIVES,
            correct_answers: 0,
            difficulty: START_DIFFICULTY,
        }
    }
}

impl ScoreLedger {
    pub fn record_correct(&mut self) {
        self.correct_answers += 1;
        self.difficulty += 1;
    }

    /// Take a life for a wrong answer. Returns `true` when none remain.
    pub fn record_wrong(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.is_out_of_lives()
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }
}
