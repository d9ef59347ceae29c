//! Math Snake - a snake arcade game interrupted by arithmetic questions
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, quiz, score, tick)
//! - `game`: Session driver wiring the simulation to a display and storage
//! - `leaderboard`: Persisted ranking of finished runs
//! - `persistence`: Key/value storage (LocalStorage on web, memory elsewhere)
//! - `platform`: Browser/native display implementations
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Data-driven grid and timing configuration

pub mod game;
pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, GameDisplay, GameError, LoopControl, Notice};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use persistence::{MemoryStorage, Storage, StorageError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Wall-clock interval between simulation ticks
    pub const TICK_INTERVAL_MS: u32 = 100;

    /// Grid dimensions (a 400x400 canvas at 20px per cell)
    pub const GRID_COLUMNS: i32 = 20;
    pub const GRID_ROWS: i32 = 20;
    /// Cell edge in canvas pixels
    pub const CELL_SIZE: u32 = 20;

    /// Where every run starts
    pub const SNAKE_START: IVec2 = IVec2::new(5, 5);

    /// Score ledger starting values
    pub const START_LIVES: u32 = 3;
    pub const START_DIFFICULTY: u32 = 1;

    /// Entries shown on the leaderboard (the full list is persisted)
    pub const LEADERBOARD_DISPLAY: usize = 5;
}
