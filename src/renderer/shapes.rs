//! Shape generation for grid cells
//!
//! Vertices are emitted in grid units (one unit per cell, `y` down);
//! [`super::RenderState`] maps them to clip space.

use super::vertex::{Vertex, colors};
use crate::sim::{Cell, GameState};

/// Two triangles covering `cell`
pub fn cell_quad(cell: Cell, color: [f32; 4]) -> [Vertex; 6] {
    let x0 = cell.x as f32;
    let y0 = cell.y as f32;
    let x1 = x0 + 1.0;
    let y1 = y0 + 1.0;
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Snake (head darker than body) followed by the apple.
///
/// Cells outside the grid are skipped.
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.snake.len() + 1) * 6);

    for (index, segment) in state.snake.segments().enumerate() {
        if !state.grid.contains(segment) {
            continue;
        }
        let color = if index == 0 {
            colors::SNAKE_HEAD
        } else {
            colors::SNAKE_BODY
        };
        vertices.extend_from_slice(&cell_quad(segment, color));
    }

    vertices.extend_from_slice(&cell_quad(state.apple, colors::APPLE));
    vertices
}
