/// Shader location of the position attribute (buffer slot 0).
pub const POSITION_LOCATION: u32 = 0;

/// Shader location of the color attribute (buffer slot 1).
pub const COLOR_LOCATION: u32 = 1;

/// Byte stride of both vertex buffers: three tightly packed f32.
pub const VERTEX_STRIDE: wgpu::BufferAddress = std::mem::size_of::<[f32; 3]>() as u64;

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![POSITION_LOCATION => Float32x3];

const COLOR_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![COLOR_LOCATION => Float32x3];

/// Vertex input layout: slot 0 = positions, slot 1 = colors, both per-vertex.
///
/// Must stay in sync with `geometry::GeometryBuffers`; a mismatch renders
/// garbage rather than failing.
pub fn vertex_buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        wgpu::VertexBufferLayout {
            array_stride: VERTEX_STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: VERTEX_STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &COLOR_ATTRS,
        },
    ]
}
