//! Aspect-preserving quad geometry for video frames.
//!
//! Given a viewport size and a frame size, produces the polygon quad (NDC) and the
//! matching texture-coordinate quad for one of two policies:
//! - [`AspectMode::Fit`]: the whole frame is visible, borders on the short axis.
//! - [`AspectMode::Fill`]: the viewport is fully covered, excess frame is cropped.
//!
//! Everything here is pure arithmetic and may run on any thread.

mod aspect;
mod error;

pub use aspect::{compute_fill_vertices, compute_fit_vertices, AspectMode, QuadGeometry};
pub use error::{GeometryError, SizeRole};
