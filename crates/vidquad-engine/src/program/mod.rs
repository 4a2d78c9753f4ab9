//! Shader program building.
//!
//! [`ProgramBuilder`] drives the compile → attach → bind attributes → link →
//! validate → resolve uniforms sequence against a [`GlContext`](crate::device::GlContext).
//! Driver objects created along the way are owned by guards, so nothing leaks when
//! a step fails.

mod builder;
mod error;
mod object;
mod uniforms;
pub mod video;

#[cfg(test)]
mod test_driver;

pub use builder::{AttributeBinding, BuildConfig, LinkedProgram, ProgramBuilder, Validation};
pub use error::{BuildError, BuildStage, DriverObject, ProgramError};
pub use object::ShaderObject;
pub use uniforms::UniformTable;
