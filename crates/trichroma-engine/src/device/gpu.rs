use winit::window::Window;

use crate::error::RenderError;

use super::surface;
use super::{GpuFrame, GpuInit};

/// Owns wgpu core objects and the surface configuration.
///
/// This type is the low-level rendering context:
/// - stores Device/Queue
/// - creates and configures the Surface once (no resize path)
/// - acquires frames and provides an encoder + view for rendering
pub struct Gpu<'w> {
    /// Surface bound to the window.
    ///
    /// Surface lifetime is tied to the window; the runtime keeps the window
    /// alive for as long as the `Gpu` exists.
    surface: wgpu::Surface<'w>,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue. Every frame is submitted here, in order.
    queue: wgpu::Queue,

    /// Configuration applied at creation. Never updated afterwards.
    config: wgpu::SurfaceConfiguration,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu; these are the
    /// only suspension points of the whole renderer.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });

        // Surface lifetime is tied to `window` via `'w`.
        let surface = instance.create_surface(window)?;

        let (adapter, device, queue) = acquire_device(&instance, Some(&surface), &init).await?;

        let caps = surface.get_capabilities(&adapter);
        let config = surface::configure_for(&caps, window.inner_size(), &init)?;
        surface.configure(&device, &config);

        log::info!(
            "surface configured: {}x{} {:?} ({:?}, {:?})",
            config.width,
            config.height,
            config.format,
            config.present_mode,
            config.alpha_mode,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    /// Returns the configured surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the surface size recorded at configuration time.
    pub fn configured_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Acquires the next surface texture and a view over it.
    ///
    /// A stale or lost surface is not recovered here; the error is returned
    /// to the caller as fatal.
    pub fn begin_frame(&self) -> Result<GpuFrame, RenderError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Ok(GpuFrame {
            surface_texture,
            view,
        })
    }

    /// Creates the command encoder for one frame.
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("trichroma frame encoder"),
            })
    }

    /// Submits the frame's command buffer and presents it.
    ///
    /// Submission is not awaited; the queue orders it after earlier frames.
    pub fn submit(&self, frame: GpuFrame, commands: wgpu::CommandBuffer) {
        let GpuFrame {
            surface_texture,
            view,
        } = frame;

        let index = self.queue.submit(std::iter::once(commands));
        log::trace!("submitted frame {index:?}");

        drop(view);
        surface_texture.present();
    }
}

/// Requests an adapter and a logical device from `instance`.
///
/// Pass `compatible_surface = None` for headless use.
pub async fn acquire_device(
    instance: &wgpu::Instance,
    compatible_surface: Option<&wgpu::Surface<'_>>,
    init: &GpuInit,
) -> Result<(wgpu::Adapter, wgpu::Device, wgpu::Queue), RenderError> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: init.power_preference,
            compatible_surface,
            force_fallback_adapter: false,
        })
        .await
        .map_err(RenderError::NoAdapter)?;

    let info = adapter.get_info();
    log::info!("using adapter \"{}\" ({:?})", info.name, info.backend);

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("trichroma device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await?;

    log::debug!("device and queue acquired");

    Ok((adapter, device, queue))
}
