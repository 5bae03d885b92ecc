use wgpu::util::DeviceExt;

use crate::error::RenderError;

use super::{TRIANGLE_COLORS, TRIANGLE_POSITIONS};

/// GPU-resident vertex buffers for the triangle.
///
/// Both buffers are written once at creation and carry only `VERTEX` usage,
/// so their contents cannot change afterwards.
pub struct GeometryBuffers {
    /// Slot 0: x, y, z per vertex.
    pub positions: wgpu::Buffer,
    /// Slot 1: r, g, b per vertex.
    pub colors: wgpu::Buffer,
}

impl GeometryBuffers {
    /// Allocates and fills both buffers.
    ///
    /// `create_buffer_init` creates each buffer mapped, copies the floats into
    /// the mapped range and unmaps it before returning.
    pub fn new(device: &wgpu::Device) -> Result<Self, RenderError> {
        let scope = device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);

        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trichroma position vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE_POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let colors = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trichroma color vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE_COLORS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(RenderError::ResourceAllocation {
                what: "vertex buffers",
                reason: err.to_string(),
            });
        }

        log::debug!(
            "vertex buffers created: positions {} B, colors {} B",
            positions.size(),
            colors.size()
        );

        Ok(Self { positions, colors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::testing::headless_device;

    #[test]
    fn creates_two_36_byte_vertex_buffers() {
        let Some((device, _queue)) = headless_device() else { return };

        let buffers = GeometryBuffers::new(&device).expect("geometry");

        for buffer in [&buffers.positions, &buffers.colors] {
            assert_eq!(buffer.size(), 36);
            assert_eq!(buffer.usage(), wgpu::BufferUsages::VERTEX);
        }
    }
}
