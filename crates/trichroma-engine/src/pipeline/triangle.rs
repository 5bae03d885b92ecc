use crate::error::RenderError;

use super::layout::vertex_buffer_layouts;
use super::shaders::{check_sources, ENTRY_POINT, FRAGMENT_SHADER, VERTEX_SHADER};

/// The render pipeline used for every frame.
///
/// Built once and never modified. There is no bind group: the triangle is
/// described entirely by its two vertex attributes.
pub struct TrianglePipeline {
    pipeline: wgpu::RenderPipeline,
    format: wgpu::TextureFormat,
}

impl TrianglePipeline {
    /// Builds the pipeline from the embedded shader programs.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Result<Self, RenderError> {
        Self::from_sources(device, format, VERTEX_SHADER, FRAGMENT_SHADER)
    }

    /// Builds the pipeline from caller-supplied WGSL.
    ///
    /// Sources are checked with naga first; nothing is created on the device
    /// when that check fails.
    pub fn from_sources(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, RenderError> {
        check_sources(vertex_src, fragment_src)?;

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trichroma vertex shader"),
            source: wgpu::ShaderSource::Wgsl(vertex_src.into()),
        });

        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trichroma fragment shader"),
            source: wgpu::ShaderSource::Wgsl(fragment_src.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("trichroma pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let buffers = vertex_buffer_layouts();

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("trichroma pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some(ENTRY_POINT),
                compilation_options: Default::default(),
                buffers: &buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some(ENTRY_POINT),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // Clockwise front face with no culling; the winding never matters.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Cw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(RenderError::PipelineCreation(err.to_string()));
        }

        log::info!("render pipeline created for {format:?}");

        Ok(Self { pipeline, format })
    }

    /// Color target format the pipeline was built for.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Underlying wgpu pipeline.
    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}
