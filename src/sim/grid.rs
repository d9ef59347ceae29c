//! Playfield geometry
//!
//! The grid is a fixed `columns x rows` rectangle of integer cells with the
//! origin in the top-left corner and `y` growing downward.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_COLUMNS, GRID_ROWS};

/// A single grid cell
pub type Cell = IVec2;

/// Fixed-size playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: i32,
    pub rows: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_COLUMNS, GRID_ROWS)
    }
}

impl Grid {
    /// Create a grid; dimensions are clamped to at least one cell
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    /// Whether `cell` lies inside `[0, columns) x [0, rows)`
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.columns && cell.y >= 0 && cell.y < self.rows
    }

    /// Uniformly random cell anywhere on the grid.
    ///
    /// Occupancy is not considered: an apple may land under the snake.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        IVec2::new(
            rng.random_range(0..self.columns),
            rng.random_range(0..self.rows),
        )
    }
}
