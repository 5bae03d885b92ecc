/// Represents a single acquired frame.
///
/// This object is short-lived and must be finalized promptly with
/// [`Gpu::submit`](super::Gpu::submit). Holding the surface texture prevents
/// acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}

impl GpuFrame {
    /// Pixel size of the acquired surface texture.
    pub fn texture_size(&self) -> (u32, u32) {
        let texture = &self.surface_texture.texture;
        (texture.width(), texture.height())
    }
}
