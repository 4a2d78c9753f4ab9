use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// Four corners of an axis-aligned quad, in triangle-strip order.
///
/// The memory layout is eight packed `f32`s: bottom-left, bottom-right,
/// top-left, top-right, each as `(x, y)`. That is the layout GL-style
/// `glVertexAttribPointer` uploads expect for a 4-vertex strip.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Quad {
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
    pub top_left: Vec2,
    pub top_right: Vec2,
}

impl Quad {
    /// Builds a y-up quad from its minimum and maximum corners.
    ///
    /// Bottom corners sit on `min.y`, top corners on `max.y`.
    #[inline]
    pub const fn from_bounds(min: Vec2, max: Vec2) -> Self {
        Self {
            bottom_left: Vec2::new(min.x, min.y),
            bottom_right: Vec2::new(max.x, min.y),
            top_left: Vec2::new(min.x, max.y),
            top_right: Vec2::new(max.x, max.y),
        }
    }

    /// Quad centered on the origin with the given half extents.
    #[inline]
    pub const fn centered(half_extents: Vec2) -> Self {
        Self::from_bounds(
            Vec2::new(-half_extents.x, -half_extents.y),
            Vec2::new(half_extents.x, half_extents.y),
        )
    }

    /// Swaps the bottom and top rows.
    ///
    /// Used for texture coordinates: decoded frames have a top-left origin while
    /// the render target has a bottom-left origin.
    #[inline]
    pub const fn flipped_vertically(self) -> Self {
        Self {
            bottom_left: self.top_left,
            bottom_right: self.top_right,
            top_left: self.bottom_left,
            top_right: self.bottom_right,
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        (self.bottom_right.x - self.bottom_left.x).abs()
    }

    #[inline]
    pub fn height(self) -> f32 {
        (self.top_left.y - self.bottom_left.y).abs()
    }

    #[inline]
    pub const fn corners(self) -> [Vec2; 4] {
        [self.bottom_left, self.bottom_right, self.top_left, self.top_right]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.corners().iter().all(|c| c.is_finite())
    }

    /// Flat `[x0, y0, x1, y1, ...]` view in corner order.
    #[inline]
    pub fn to_array(self) -> [f32; 8] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn from_array(values: [f32; 8]) -> Self {
        bytemuck::cast(values)
    }
}
