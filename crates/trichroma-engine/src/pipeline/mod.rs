//! Shader modules and the render pipeline for the triangle.
//!
//! Shader sources are embedded at compile time and checked with naga before
//! any GPU object is created, so broken WGSL fails setup with readable
//! diagnostics instead of a device validation panic.

mod layout;
mod shaders;
mod triangle;

pub use layout::{vertex_buffer_layouts, COLOR_LOCATION, POSITION_LOCATION, VERTEX_STRIDE};
pub use shaders::{check_sources, ENTRY_POINT, FRAGMENT_SHADER, VERTEX_SHADER};
pub use triangle::TrianglePipeline;
