/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. The surface format, usage and alpha
/// mode are fixed (see [`surface`](super::surface)) and intentionally not
/// configurable here.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends wgpu may pick an adapter from.
    pub backends: wgpu::Backends,

    /// Adapter preference passed to `request_adapter`.
    pub power_preference: wgpu::PowerPreference,

    /// Present mode (swap behavior).
    ///
    /// FIFO paces the frame loop to the display refresh and is always supported.
    pub present_mode: wgpu::PresentMode,

    /// Desired maximum frame latency for the surface.
    ///
    /// Bounds how many submitted frames may be in flight. This value is a hint;
    /// support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
        }
    }
}
