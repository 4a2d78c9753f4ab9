//! WGSL passthrough shader for the wgpu video quad path.

/// Vertex input location of `VideoVertex::position`.
pub const LOCATION_POSITION: u32 = 0;
/// Vertex input location of `VideoVertex::tex_coord`.
pub const LOCATION_TEX_COORD: u32 = 1;

/// Bind group 0 entry holding the frame texture view.
pub const BINDING_FRAME: u32 = 0;
/// Bind group 0 entry holding the frame sampler.
pub const BINDING_SAMPLER: u32 = 1;

pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

/// Positions arrive in NDC and texture coordinates are already flipped, so both
/// stages pass their inputs straight through.
pub const VIDEO_QUAD_WGSL: &str = r#"
struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) tex_coord: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(in.position, 0.0, 1.0);
    out.tex_coord = in.tex_coord;
    return out;
}

@group(0) @binding(0) var video_frame: texture_2d<f32>;
@group(0) @binding(1) var video_sampler: sampler;

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(video_frame, video_sampler, in.tex_coord);
}
"#;
