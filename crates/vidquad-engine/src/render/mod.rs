//! wgpu path for mapped video quads.
//!
//! Converts [`QuadGeometry`](crate::geometry::QuadGeometry) into interleaved
//! vertices, keeps them in a wgpu vertex buffer and draws them with a WGSL
//! passthrough pipeline. Frame texture upload belongs to the host.
//!
//! This path is independent of [`program`](crate::program), which builds GLSL
//! programs through a [`GlContext`](crate::device::GlContext).

mod ctx;
mod pipeline;
mod shader;
mod video_quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use pipeline::VideoQuadRenderer;
pub use shader::{
    BINDING_FRAME, BINDING_SAMPLER, LOCATION_POSITION, LOCATION_TEX_COORD, VIDEO_QUAD_WGSL,
};
pub use video_quad::{VideoQuadBuffer, VideoVertex};
