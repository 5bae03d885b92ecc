use std::ops::Range;

use crate::geometry::{GeometryBuffers, VERTEX_COUNT};
use crate::pipeline::TrianglePipeline;

/// Clear color of every frame: opaque black.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Which geometry buffer a vertex slot is bound to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VertexStream {
    Positions,
    Colors,
}

/// One command recorded into the frame's render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PassCmd {
    SetPipeline,
    SetViewport {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        min_depth: f32,
        max_depth: f32,
    },
    SetScissor {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    SetVertexBuffer {
        slot: u32,
        stream: VertexStream,
    },
    Draw {
        vertices: Range<u32>,
        instances: Range<u32>,
    },
}

/// Contents of the single render pass issued each frame.
///
/// Recording is separate from encoding so the pass can be inspected without a
/// device; [`FramePlan::encode`] turns it into the frame's command buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub clear: wgpu::Color,
    pub cmds: Vec<PassCmd>,
}

impl FramePlan {
    /// Records the pass for a window of `window_size` pixels drawing into a
    /// surface texture of `texture_size` pixels.
    ///
    /// Viewport and scissor follow the window, clamped to the texture: the
    /// surface is never reconfigured, so after a resize the texture keeps its
    /// original extent and the image is stretched or cropped instead.
    pub fn record(window_size: (u32, u32), texture_size: (u32, u32)) -> Self {
        let (width, height) = render_extent(window_size, texture_size);

        let cmds = vec![
            PassCmd::SetPipeline,
            PassCmd::SetViewport {
                x: 0.0,
                y: 0.0,
                width: width as f32,
                height: height as f32,
                min_depth: 0.0,
                max_depth: 1.0,
            },
            PassCmd::SetScissor {
                x: 0,
                y: 0,
                width,
                height,
            },
            PassCmd::SetVertexBuffer {
                slot: 0,
                stream: VertexStream::Positions,
            },
            PassCmd::SetVertexBuffer {
                slot: 1,
                stream: VertexStream::Colors,
            },
            PassCmd::Draw {
                vertices: 0..VERTEX_COUNT,
                instances: 0..1,
            },
        ];

        Self {
            clear: CLEAR_COLOR,
            cmds,
        }
    }

    /// Iterates the draw calls of the plan as `(vertices, instances)`.
    pub fn draws(&self) -> impl Iterator<Item = (&Range<u32>, &Range<u32>)> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            PassCmd::Draw {
                vertices,
                instances,
            } => Some((vertices, instances)),
            _ => None,
        })
    }

    /// Encodes the frame: one render pass into `view`, cleared to
    /// [`FramePlan::clear`] and stored, containing the recorded commands.
    ///
    /// Consumes the encoder; the returned buffer is the only one the frame
    /// submits.
    pub fn encode(
        &self,
        mut encoder: wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        pipeline: &TrianglePipeline,
        geometry: &GeometryBuffers,
    ) -> wgpu::CommandBuffer {
        // The pass borrows the encoder; it must end before finish().
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("trichroma triangle pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.replay(&mut pass, pipeline, geometry);
        }

        encoder.finish()
    }

    /// Encodes the recorded commands into `pass`.
    fn replay(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        pipeline: &TrianglePipeline,
        geometry: &GeometryBuffers,
    ) {
        for cmd in &self.cmds {
            match cmd {
                PassCmd::SetPipeline => pass.set_pipeline(pipeline.raw()),
                PassCmd::SetViewport {
                    x,
                    y,
                    width,
                    height,
                    min_depth,
                    max_depth,
                } => pass.set_viewport(*x, *y, *width, *height, *min_depth, *max_depth),
                PassCmd::SetScissor {
                    x,
                    y,
                    width,
                    height,
                } => pass.set_scissor_rect(*x, *y, *width, *height),
                PassCmd::SetVertexBuffer { slot, stream } => {
                    let buffer = match stream {
                        VertexStream::Positions => &geometry.positions,
                        VertexStream::Colors => &geometry.colors,
                    };
                    pass.set_vertex_buffer(*slot, buffer.slice(..));
                }
                PassCmd::Draw {
                    vertices,
                    instances,
                } => pass.draw(vertices.clone(), instances.clone()),
            }
        }
    }
}

/// Pixel extent used for viewport and scissor.
///
/// wgpu rejects rects outside the render target and empty scissors, so each
/// dimension is clamped to `1..=texture`.
fn render_extent(window_size: (u32, u32), texture_size: (u32, u32)) -> (u32, u32) {
    let width = window_size.0.min(texture_size.0).max(1);
    let height = window_size.1.min(texture_size.1).max(1);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_draw_of_three_vertices() {
        let plan = FramePlan::record((640, 480), (640, 480));

        let draws: Vec<_> = plan.draws().collect();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0], (&(0..3), &(0..1)));
    }

    #[test]
    fn clears_to_opaque_black() {
        let plan = FramePlan::record((1, 1), (1, 1));
        assert_eq!(plan.clear, wgpu::Color::BLACK);
    }

    #[test]
    fn binds_pipeline_then_buffers_in_slot_order() {
        let plan = FramePlan::record((640, 480), (640, 480));

        assert_eq!(plan.cmds.first(), Some(&PassCmd::SetPipeline));

        let bindings: Vec<_> = plan
            .cmds
            .iter()
            .filter_map(|cmd| match cmd {
                PassCmd::SetVertexBuffer { slot, stream } => Some((*slot, *stream)),
                _ => None,
            })
            .collect();
        assert_eq!(
            bindings,
            vec![(0, VertexStream::Positions), (1, VertexStream::Colors)]
        );

        assert!(matches!(plan.cmds.last(), Some(PassCmd::Draw { .. })));
    }

    #[test]
    fn viewport_and_scissor_cover_full_surface() {
        let plan = FramePlan::record((1280, 720), (1280, 720));

        assert!(plan.cmds.contains(&PassCmd::SetViewport {
            x: 0.0,
            y: 0.0,
            width: 1280.0,
            height: 720.0,
            min_depth: 0.0,
            max_depth: 1.0,
        }));
        assert!(plan.cmds.contains(&PassCmd::SetScissor {
            x: 0,
            y: 0,
            width: 1280,
            height: 720,
        }));
    }

    #[test]
    fn grown_window_is_clamped_to_stale_texture() {
        let plan = FramePlan::record((1920, 1080), (1280, 720));

        assert!(plan.cmds.contains(&PassCmd::SetScissor {
            x: 0,
            y: 0,
            width: 1280,
            height: 720,
        }));
    }

    #[test]
    fn shrunk_window_uses_new_dimensions() {
        let plan = FramePlan::record((800, 600), (1280, 720));

        assert!(plan.cmds.contains(&PassCmd::SetScissor {
            x: 0,
            y: 0,
            width: 800,
            height: 600,
        }));
    }

    #[test]
    fn zero_sized_window_keeps_a_one_pixel_rect() {
        assert_eq!(render_extent((0, 0), (640, 480)), (1, 1));
    }

    // ── encoded frames on a headless device ───────────────────────────────

    const TARGET: u32 = 64;

    /// Encodes one frame into an offscreen BGRA target and reads it back.
    ///
    /// Only the buffer returned by `encode` is submitted for the frame; a
    /// second submission copies the result out.
    fn render_offscreen(window_size: (u32, u32)) -> Option<Vec<u8>> {
        use crate::device::surface::{SURFACE_FORMAT, SURFACE_USAGE};
        use crate::device::testing::headless_device;

        let (device, queue) = headless_device()?;

        let geometry = GeometryBuffers::new(&device).expect("geometry");
        let pipeline = TrianglePipeline::new(&device, SURFACE_FORMAT).expect("pipeline");

        let extent = wgpu::Extent3d {
            width: TARGET,
            height: TARGET,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("offscreen target"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SURFACE_FORMAT,
            usage: SURFACE_USAGE,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let plan = FramePlan::record(window_size, (texture.width(), texture.height()));

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("offscreen frame encoder"),
        });
        let commands = plan.encode(encoder, &view, &pipeline, &geometry);
        queue.submit(std::iter::once(commands));

        // 64 px * 4 B is already a multiple of COPY_BYTES_PER_ROW_ALIGNMENT.
        let row_bytes = TARGET * 4;
        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("offscreen readback"),
            size: (row_bytes * TARGET) as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut copy = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("offscreen copy encoder"),
        });
        copy.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(row_bytes),
                    rows_per_image: Some(TARGET),
                },
            },
            extent,
        );
        queue.submit(std::iter::once(copy.finish()));

        let error = pollster::block_on(scope.pop());
        assert!(error.is_none(), "validation error: {error:?}");

        let slice = readback.slice(..);
        let (sender, receiver) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            sender.send(result).unwrap();
        });
        device.poll(wgpu::PollType::wait_indefinitely()).unwrap();
        receiver.recv().unwrap().unwrap();

        let pixels = slice.get_mapped_range().to_vec();
        Some(pixels)
    }

    /// BGRA bytes of the pixel at (x, y).
    fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 4] {
        let i = ((y * TARGET + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn encoded_frame_clears_outside_the_triangle_to_opaque_black() {
        let Some(pixels) = render_offscreen((TARGET, TARGET)) else { return };

        // Top corners lie outside the triangle.
        assert_eq!(pixel(&pixels, 0, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&pixels, TARGET - 1, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn encoded_frame_draws_vertex_colors() {
        let Some(pixels) = render_offscreen((TARGET, TARGET)) else { return };

        // Near each vertex its own channel dominates. BGRA order: [b, g, r, a].
        let [b, g, r, a] = pixel(&pixels, 2, TARGET - 2);
        assert!(r > g && r > b && a == 255, "bottom-left {:?}", [b, g, r, a]);

        let [b, g, r, a] = pixel(&pixels, TARGET / 2, 2);
        assert!(g > r && g > b && a == 255, "top {:?}", [b, g, r, a]);

        let [b, g, r, a] = pixel(&pixels, TARGET - 3, TARGET - 2);
        assert!(b > r && b > g && a == 255, "bottom-right {:?}", [b, g, r, a]);
    }

    #[test]
    fn encoded_frame_tolerates_window_larger_than_texture() {
        // Unhandled resize: the window grew, the surface texture did not.
        let Some(pixels) = render_offscreen((TARGET * 2, TARGET * 2)) else { return };

        assert_eq!(pixel(&pixels, 0, 0), [0, 0, 0, 255]);
        let [b, g, r, _] = pixel(&pixels, TARGET / 2, TARGET * 3 / 4);
        assert!(r > 0 || g > 0 || b > 0);
    }
}
