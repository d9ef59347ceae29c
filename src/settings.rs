//! Game settings
//!
//! Persisted separately from the leaderboard. Missing or unreadable settings
//! fall back to the defaults; out-of-range values are clamped on load.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{Storage, StorageError, load_json, save_json};
use crate::sim::Grid;

/// Smallest grid that still fits the starting cell with room to move
pub const MIN_GRID_CELLS: i32 = 8;
pub const MAX_GRID_CELLS: i32 = 80;

/// Tick interval bounds (ms)
pub const MIN_TICK_INTERVAL_MS: u32 = 30;
pub const MAX_TICK_INTERVAL_MS: u32 = 1000;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Grid ===
    /// Cells across
    pub columns: i32,
    /// Cells down
    pub rows: i32,
    /// Cell edge in canvas pixels
    pub cell_size: u32,

    // === Timing ===
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u32,

    // === HUD ===
    /// Leaderboard entries shown after a run
    pub leaderboard_display: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            cell_size: CELL_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            leaderboard_display: LEADERBOARD_DISPLAY,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "math_snake_settings";

    /// Playfield described by these settings
    pub fn grid(&self) -> Grid {
        Grid::new(self.columns, self.rows)
    }

    /// Canvas size in pixels (width, height)
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.columns as u32 * self.cell_size,
            self.rows as u32 * self.cell_size,
        )
    }

    /// Clamp every field into its supported range
    pub fn sanitized(mut self) -> Self {
        self.columns = self.columns.clamp(MIN_GRID_CELLS, MAX_GRID_CELLS);
        self.rows = self.rows.clamp(MIN_GRID_CELLS, MAX_GRID_CELLS);
        self.cell_size = self.cell_size.clamp(4, 64);
        self.tick_interval_ms = self
            .tick_interval_ms
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        self.leaderboard_display = self.leaderboard_display.max(1);
        self
    }

    /// Load settings from storage
    pub fn load(storage: &dyn Storage) -> Self {
        match load_json::<Settings>(storage, Self::STORAGE_KEY) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from storage");
                settings.sanitized()
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings, writing the defaults back when nothing is stored yet
    /// so the key exists to be edited
    pub fn load_or_init(storage: &mut dyn Storage) -> Self {
        if matches!(storage.get_item(Self::STORAGE_KEY), Ok(None)) {
            let settings = Self::default();
            if let Err(e) = settings.save(storage) {
                log::warn!("Failed to write default settings: {}", e);
            }
            return settings;
        }
        Self::load(storage)
    }

    /// Save settings to storage
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        save_json(storage, Self::STORAGE_KEY, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}
