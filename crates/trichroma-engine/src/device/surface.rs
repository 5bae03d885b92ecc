//! Fixed surface configuration.
//!
//! The surface is configured exactly once: 8-bit BGRA (non-sRGB), usable as a
//! render attachment and a copy source, composited opaque.

use winit::dpi::PhysicalSize;

use crate::error::RenderError;

use super::GpuInit;

/// Pixel format of the presentation surface.
pub const SURFACE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

/// Usage flags of the presentation surface.
pub const SURFACE_USAGE: wgpu::TextureUsages =
    wgpu::TextureUsages::RENDER_ATTACHMENT.union(wgpu::TextureUsages::COPY_SRC);

/// Alpha compositing mode. The frame never blends with what is behind the window.
pub const SURFACE_ALPHA: wgpu::CompositeAlphaMode = wgpu::CompositeAlphaMode::Opaque;

/// Builds the one-time surface configuration, checked against `caps`.
///
/// wgpu rejects a 0x0 surface, so each dimension is clamped to at least 1.
pub fn configure_for(
    caps: &wgpu::SurfaceCapabilities,
    size: PhysicalSize<u32>,
    init: &GpuInit,
) -> Result<wgpu::SurfaceConfiguration, RenderError> {
    if caps.formats.is_empty() {
        return Err(RenderError::SurfaceUnavailable(
            "surface is not compatible with the selected adapter".to_string(),
        ));
    }

    if !caps.formats.contains(&SURFACE_FORMAT) {
        return Err(RenderError::SurfaceUnavailable(format!(
            "format {SURFACE_FORMAT:?} not supported (available: {:?})",
            caps.formats
        )));
    }

    if !caps.usages.contains(SURFACE_USAGE) {
        return Err(RenderError::SurfaceUnavailable(format!(
            "usage {SURFACE_USAGE:?} not supported (available: {:?})",
            caps.usages
        )));
    }

    if !caps.alpha_modes.contains(&SURFACE_ALPHA) {
        return Err(RenderError::SurfaceUnavailable(format!(
            "alpha mode {SURFACE_ALPHA:?} not supported (available: {:?})",
            caps.alpha_modes
        )));
    }

    let present_mode = if caps.present_modes.contains(&init.present_mode) {
        init.present_mode
    } else {
        log::warn!(
            "present mode {:?} unsupported; falling back to Fifo",
            init.present_mode
        );
        wgpu::PresentMode::Fifo
    };

    Ok(wgpu::SurfaceConfiguration {
        usage: SURFACE_USAGE,
        format: SURFACE_FORMAT,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode,
        alpha_mode: SURFACE_ALPHA,
        view_formats: vec![],
        desired_maximum_frame_latency: init.desired_maximum_frame_latency,
    })
}
