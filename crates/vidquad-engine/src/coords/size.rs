/// Width/height pair for a viewport or a video frame.
///
/// Units are whatever the caller uses (points or pixels); the geometry mapper only
/// looks at ratios, so both sizes passed to one call must share a unit.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height. Only meaningful for valid sizes.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}
