//! Built-in passthrough program for drawing a video frame on a textured quad.
//!
//! GLSL ES 1.00, so the same sources build on GLES 2 and desktop GL
//! compatibility contexts through a [`GlContext`]. Hosts feed it from their own GL
//! vertex arrays, e.g. the eight floats of
//! [`Quad::to_array`](crate::coords::Quad::to_array) per attribute. The wgpu path
//! in [`render`](crate::render) uses its own WGSL shader instead.

use crate::device::GlContext;

use super::builder::{AttributeBinding, LinkedProgram, ProgramBuilder};
use super::error::BuildError;

pub const ATTRIB_POSITION: u32 = 0;
pub const ATTRIB_TEXCOORD: u32 = 1;

/// Index of the frame sampler in [`VIDEO_UNIFORMS`].
pub const UNIFORM_VIDEOFRAME: usize = 0;

pub const VIDEO_ATTRIBUTES: [AttributeBinding<'static>; 2] = [
    AttributeBinding::new("position", ATTRIB_POSITION),
    AttributeBinding::new("texcoord", ATTRIB_TEXCOORD),
];

pub const VIDEO_UNIFORMS: [&str; 1] = ["videoframe"];

pub const VIDEO_VERTEX_SHADER: &str = r"attribute vec4 position;
attribute vec2 texcoord;

varying vec2 v_texcoord;

void main() {
    gl_Position = position;
    v_texcoord = texcoord;
}
";

pub const VIDEO_FRAGMENT_SHADER: &str = r"precision mediump float;

varying vec2 v_texcoord;

uniform sampler2D videoframe;

void main() {
    gl_FragColor = texture2D(videoframe, v_texcoord);
}
";

impl<'c, C: GlContext> ProgramBuilder<'c, C> {
    /// Builds the passthrough video program with the standard bindings.
    pub fn create_video_program(&self) -> Result<LinkedProgram<C::Program>, BuildError> {
        self.create_program(
            VIDEO_VERTEX_SHADER,
            VIDEO_FRAGMENT_SHADER,
            &VIDEO_ATTRIBUTES,
            &VIDEO_UNIFORMS,
        )
    }
}
