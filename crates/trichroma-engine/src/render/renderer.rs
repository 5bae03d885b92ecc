use winit::window::Window;

use crate::device::{Gpu, GpuInit};
use crate::error::RenderError;
use crate::geometry::GeometryBuffers;
use crate::pipeline::TrianglePipeline;
use crate::time::{FrameClock, FrameTime};

use super::FramePlan;

/// Everything a frame needs, created once and reused by every tick.
///
/// Device, queue, pipeline and vertex buffers are only read after setup, so
/// ticks share nothing mutable apart from the frame clock.
pub struct Renderer<'w> {
    gpu: Gpu<'w>,
    geometry: GeometryBuffers,
    pipeline: TrianglePipeline,
    clock: FrameClock,
}

impl<'w> Renderer<'w> {
    /// Runs the whole setup sequence: device, surface, geometry, pipeline.
    ///
    /// Any failure aborts setup; no partially built renderer is returned.
    pub fn new(window: &'w Window, init: GpuInit) -> Result<Self, RenderError> {
        let gpu = pollster::block_on(Gpu::new(window, init))?;
        let geometry = GeometryBuffers::new(gpu.device())?;
        let pipeline = TrianglePipeline::new(gpu.device(), gpu.surface_format())?;

        let (width, height) = gpu.configured_size();
        log::info!("renderer ready ({width}x{height})");

        Ok(Self {
            gpu,
            geometry,
            pipeline,
            clock: FrameClock::default(),
        })
    }

    /// Renders and presents one frame.
    ///
    /// A surface that cannot hand out a texture is reported as
    /// `SurfaceTextureUnavailable`; the caller is expected to stop.
    pub fn render_frame(&mut self, window: &Window) -> Result<FrameTime, RenderError> {
        let time = self.clock.tick();

        let frame = self.gpu.begin_frame()?;

        let size = window.inner_size();
        let plan = FramePlan::record((size.width, size.height), frame.texture_size());

        let commands = plan.encode(
            self.gpu.create_encoder(),
            &frame.view,
            &self.pipeline,
            &self.geometry,
        );

        window.pre_present_notify();
        self.gpu.submit(frame, commands);

        log::trace!("frame {} encoded ({} cmds)", time.frame_index, plan.cmds.len());

        Ok(time)
    }
}
