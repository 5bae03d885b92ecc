//! Frame loop: renderer context and per-frame pass recording.
//!
//! Convention:
//! - one render pass per frame, cleared to opaque black
//! - geometry is already in clip space; no uniforms are bound

mod plan;
mod renderer;

pub use plan::{FramePlan, PassCmd, VertexStream, CLEAR_COLOR};
pub use renderer::Renderer;
