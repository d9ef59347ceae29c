//! Leaderboard of finished runs
//!
//! Persisted to storage as the full list (sorted by correct answers,
//! descending); only the top few are shown.

use serde::{Deserialize, Serialize};

use crate::persistence::{Storage, StorageError, load_json, save_json};

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Player's name
    pub name: String,
    /// Questions answered correctly in the run
    #[serde(rename = "correctAnswers")]
    pub correct_answers: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, correct_answers: u32) -> Self {
        Self {
            name: name.into(),
            correct_answers,
        }
    }

    /// Display line, e.g. "Ada: 4 correct answers"
    pub fn display_line(&self) -> String {
        format!("{}: {} correct answers", self.name, self.correct_answers)
    }
}

/// Ranked list of runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Storage key holding the serialized list
    pub const STORAGE_KEY: &'static str = "leaderboard";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from stored entries, restoring the ranking order
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut board = Self { entries };
        board.sort();
        board
    }

    /// Record a finished run. Returns the rank achieved (1-indexed).
    ///
    /// Ties keep insertion order, so a new entry ranks below existing
    /// entries with the same count.
    pub fn record(&mut self, name: impl Into<String>, correct_answers: u32) -> usize {
        self.entries.push(LeaderboardEntry::new(name, correct_answers));
        self.sort();
        let after = self
            .entries
            .iter()
            .rposition(|e| e.correct_answers >= correct_answers)
            .unwrap_or(0);
        after + 1
    }

    /// Best `n` entries
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Every stored entry in rank order
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sort(&mut self) {
        // Stable: equal scores stay in the order they were recorded
        self.entries
            .sort_by(|a, b| b.correct_answers.cmp(&a.correct_answers));
    }

    /// Load the leaderboard from storage, starting fresh if it is missing
    /// or unreadable.
    ///
    /// Malformed entries are skipped one by one so a single bad record does
    /// not cost the rest of the list.
    pub fn load(storage: &dyn Storage) -> Self {
        match load_json::<Vec<serde_json::Value>>(storage, Self::STORAGE_KEY) {
            Ok(Some(values)) => {
                let stored = values.len();
                let entries: Vec<LeaderboardEntry> = values
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, value)| match serde_json::from_value(value) {
                        Ok(entry) => Some(entry),
                        Err(e) => {
                            log::warn!("Skipping leaderboard entry {}: {}", i, e);
                            None
                        }
                    })
                    .collect();
                log::info!("Loaded {} of {} leaderboard entries", entries.len(), stored);
                Self::from_entries(entries)
            }
            Ok(None) => {
                log::info!("No leaderboard found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Discarding unreadable leaderboard: {}", e);
                Self::new()
            }
        }
    }

    /// Overwrite the stored leaderboard with the full list
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        save_json(storage, Self::STORAGE_KEY, &self.entries)?;
        log::info!("Leaderboard saved ({} entries)", self.entries.len());
        Ok(())
    }
}
