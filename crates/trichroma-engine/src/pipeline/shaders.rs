use crate::error::{RenderError, ShaderStage};

use super::layout::{COLOR_LOCATION, POSITION_LOCATION};

/// Entry point name used by both shader programs.
pub const ENTRY_POINT: &str = "main";

/// Vertex program: passes clip-space position through and forwards the color.
pub const VERTEX_SHADER: &str = include_str!("shaders/triangle.vert.wgsl");

/// Fragment program: writes the interpolated vertex color, alpha 1.
pub const FRAGMENT_SHADER: &str = include_str!("shaders/triangle.frag.wgsl");

/// Parses and validates both programs and checks their interfaces against the
/// vertex layout.
///
/// Returns `ShaderCompilation` for WGSL syntax or semantic errors and
/// `PipelineCreation` when an entry point is missing or the vertex inputs do
/// not match the two `vec3<f32>` attributes.
pub fn check_sources(vertex_src: &str, fragment_src: &str) -> Result<(), RenderError> {
    let vertex = compile(ShaderStage::Vertex, vertex_src)?;
    let fragment = compile(ShaderStage::Fragment, fragment_src)?;

    check_vertex_interface(&vertex)?;
    find_entry_point(&fragment, naga::ShaderStage::Fragment)?;

    Ok(())
}

fn compile(stage: ShaderStage, source: &str) -> Result<naga::Module, RenderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|err| {
        RenderError::ShaderCompilation {
            stage,
            diagnostics: err.emit_to_string(source),
        }
    })?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    )
    .validate(&module)
    .map_err(|err| RenderError::ShaderCompilation {
        stage,
        diagnostics: err.emit_to_string(source),
    })?;

    log::debug!("{stage} shader validated ({} entry points)", module.entry_points.len());

    Ok(module)
}

fn find_entry_point(
    module: &naga::Module,
    stage: naga::ShaderStage,
) -> Result<&naga::EntryPoint, RenderError> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.stage == stage && ep.name == ENTRY_POINT)
        .ok_or_else(|| {
            RenderError::PipelineCreation(format!(
                "missing {stage:?} entry point `{ENTRY_POINT}`"
            ))
        })
}

fn check_vertex_interface(module: &naga::Module) -> Result<(), RenderError> {
    let ep = find_entry_point(module, naga::ShaderStage::Vertex)?;

    let mut inputs = vertex_inputs(module, ep);
    inputs.sort_by_key(|(location, _)| *location);

    let locations: Vec<u32> = inputs.iter().map(|(location, _)| *location).collect();
    if locations != [POSITION_LOCATION, COLOR_LOCATION] {
        return Err(RenderError::PipelineCreation(format!(
            "vertex inputs at locations {locations:?}, expected [{POSITION_LOCATION}, {COLOR_LOCATION}]"
        )));
    }

    for (location, ty) in inputs {
        if !is_vec3_f32(&module.types[ty].inner) {
            return Err(RenderError::PipelineCreation(format!(
                "vertex input at location {location} must be vec3<f32>"
            )));
        }
    }

    Ok(())
}

/// Collects `(location, type)` for every user-defined vertex input, looking
/// through struct arguments.
fn vertex_inputs(
    module: &naga::Module,
    ep: &naga::EntryPoint,
) -> Vec<(u32, naga::Handle<naga::Type>)> {
    let mut out = Vec::new();

    for arg in &ep.function.arguments {
        match &arg.binding {
            Some(naga::Binding::Location { location, .. }) => out.push((*location, arg.ty)),
            Some(naga::Binding::BuiltIn(_)) => {}
            None => {
                if let naga::TypeInner::Struct { members, .. } = &module.types[arg.ty].inner {
                    for member in members {
                        if let Some(naga::Binding::Location { location, .. }) = &member.binding {
                            out.push((*location, member.ty));
                        }
                    }
                }
            }
        }
    }

    out
}

fn is_vec3_f32(inner: &naga::TypeInner) -> bool {
    match inner {
        naga::TypeInner::Vector { size, scalar } => {
            *size == naga::VectorSize::Tri && *scalar == naga::Scalar::F32
        }
        _ => false,
    }
}
