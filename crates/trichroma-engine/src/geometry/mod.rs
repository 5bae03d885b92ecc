//! Vertex data for the triangle and its GPU buffers.
//!
//! Positions and colors live in two separately bound buffers. Entry `i` of
//! one always belongs to entry `i` of the other.

mod buffers;
mod triangle;

pub use buffers::GeometryBuffers;
pub use triangle::{TRIANGLE_COLORS, TRIANGLE_POSITIONS, VERTEX_COUNT};
