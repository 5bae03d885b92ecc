use std::fmt;

/// Shader stage a diagnostic belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors raised while setting up the renderer or driving a frame.
///
/// Every variant is terminal: setup errors abort initialization and frame
/// errors stop the loop. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no compatible GPU adapter found")]
    NoAdapter(#[source] wgpu::RequestAdapterError),

    #[error("failed to request device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("failed to allocate {what}: {reason}")]
    ResourceAllocation { what: &'static str, reason: String },

    #[error("{stage} shader failed to compile:\n{diagnostics}")]
    ShaderCompilation {
        stage: ShaderStage,
        diagnostics: String,
    },

    #[error("failed to create render pipeline: {0}")]
    PipelineCreation(String),

    #[error("surface texture unavailable: {0}")]
    SurfaceTextureUnavailable(#[from] wgpu::SurfaceError),
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        RenderError::SurfaceUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_error_names_stage_and_keeps_diagnostics() {
        let err = RenderError::ShaderCompilation {
            stage: ShaderStage::Fragment,
            diagnostics: "error: expected ';'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("fragment shader failed to compile"));
        assert!(msg.contains("expected ';'"));
    }

    #[test]
    fn surface_error_maps_to_texture_unavailable() {
        let err: RenderError = wgpu::SurfaceError::Outdated.into();
        assert!(matches!(err, RenderError::SurfaceTextureUnavailable(_)));
    }
}
