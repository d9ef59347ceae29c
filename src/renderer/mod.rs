//! WebGPU rendering module
//!
//! Every cell is a flat-colored quad; the playfield is rebuilt from the
//! game state each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use shapes::frame_vertices;
pub use vertex::Vertex;
