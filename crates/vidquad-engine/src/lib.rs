//! vidquad engine crate.
//!
//! Prepares the GPU side of a video surface:
//! - builds shader programs against a host-supplied rendering context
//! - maps video frames into viewports with aspect-preserving quad geometry
//! - uploads the resulting quads as vertex data and draws them through wgpu

pub mod coords;
pub mod device;
pub mod geometry;
pub mod program;
pub mod render;

pub mod logging;
