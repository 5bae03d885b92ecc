//! Trichroma engine crate.
//!
//! Draws one vertex-colored triangle with wgpu, redrawn every display frame.
//! Setup order: device, surface, geometry, pipeline; then the frame loop.

pub mod device;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod time;
pub mod window;

pub use error::{RenderError, ShaderStage};
