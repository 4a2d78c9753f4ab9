//! Coordinate and geometry types shared by the geometry mapper and the renderers.
//!
//! Conventions:
//! - Vertex positions are normalized device coordinates, origin at the center,
//!   +Y up, range [-1, 1].
//! - Texture coordinates are normalized sampling coordinates, origin at the
//!   frame's top-left, range [0, 1].

mod quad;
mod size;
mod vec2;

pub use quad::Quad;
pub use size::Size;
pub use vec2::Vec2;
