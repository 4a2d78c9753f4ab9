//! Rendering-context seam.
//!
//! The engine never talks to a graphics driver directly. Hosts hand it a
//! [`GlContext`] implementation bound to their current context; tests use a
//! scripted driver.

mod gl;

pub use gl::{GlContext, ShaderStage, UniformLocation};
