use std::fmt;
use std::str::FromStr;

use crate::coords::{Quad, Size, Vec2};

use super::{GeometryError, SizeRole};

/// Polygon quad plus the texture quad that samples the frame onto it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadGeometry {
    /// Polygon corners in normalized device coordinates.
    pub vertices: Quad,
    /// Texture sampling corners, vertically flipped relative to `vertices`.
    pub tex_coords: Quad,
}

/// How a frame is scaled into a viewport with a different aspect ratio.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum AspectMode {
    /// Whole frame visible; borders on the shorter axis.
    #[default]
    Fit,
    /// Viewport fully covered; the frame is cropped on the longer axis.
    Fill,
}

impl AspectMode {
    /// Maps `frame` into `viewport` under this policy.
    pub fn map(self, viewport: Size, frame: Size) -> Result<QuadGeometry, GeometryError> {
        match self {
            AspectMode::Fit => compute_fit_vertices(viewport, frame),
            AspectMode::Fill => compute_fill_vertices(viewport, frame),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AspectMode::Fit => "fit",
            AspectMode::Fill => "fill",
        }
    }
}

impl fmt::Display for AspectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fit" => Ok(AspectMode::Fit),
            "fill" => Ok(AspectMode::Fill),
            _ => Err(GeometryError::UnknownMode(s.to_string())),
        }
    }
}

/// Scales the frame so all of it is visible inside the viewport.
///
/// The polygon is centered and spans the full extent on one axis; the other axis is
/// shortened so the on-screen aspect ratio matches the frame. The texture quad
/// always covers the whole frame.
pub fn compute_fit_vertices(viewport: Size, frame: Size) -> Result<QuadGeometry, GeometryError> {
    let scale = scale_ratio(viewport, frame)?;

    // Ratio of the two scales, so equal aspect ratios give exactly 1.0.
    let half_extents = if scale.y > scale.x {
        Vec2::new(1.0, scale.x / scale.y)
    } else {
        Vec2::new(scale.y / scale.x, 1.0)
    };

    Ok(QuadGeometry {
        vertices: Quad::centered(half_extents),
        tex_coords: Quad::from_bounds(Vec2::zero(), Vec2::splat(1.0)).flipped_vertically(),
    })
}

/// Scales the frame so it covers the whole viewport.
///
/// The polygon is always the full NDC square; the texture quad is the centered
/// sub-rectangle of the frame that remains visible after cropping.
pub fn compute_fill_vertices(viewport: Size, frame: Size) -> Result<QuadGeometry, GeometryError> {
    let scale = scale_ratio(viewport, frame)?;

    let crop = if scale.y > scale.x {
        Vec2::new(scale.x / scale.y, 1.0)
    } else {
        Vec2::new(1.0, scale.y / scale.x)
    };

    let center = Vec2::splat(0.5);
    Ok(QuadGeometry {
        vertices: Quad::centered(Vec2::splat(1.0)),
        tex_coords: Quad::from_bounds(center - crop * 0.5, center + crop * 0.5)
            .flipped_vertically(),
    })
}

/// Per-axis viewport/frame ratio after checking both sizes.
fn scale_ratio(viewport: Size, frame: Size) -> Result<Vec2, GeometryError> {
    check_size(SizeRole::Viewport, viewport)?;
    check_size(SizeRole::Frame, frame)?;
    Ok(Vec2::new(
        viewport.width / frame.width,
        viewport.height / frame.height,
    ))
}

fn check_size(role: SizeRole, size: Size) -> Result<(), GeometryError> {
    if size.is_valid() {
        Ok(())
    } else {
        Err(GeometryError::InvalidSize {
            role,
            width: size.width,
            height: size.height,
        })
    }
}
