use std::fmt;

/// Which input of a mapping call a size came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SizeRole {
    Viewport,
    Frame,
}

impl fmt::Display for SizeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeRole::Viewport => f.write_str("viewport"),
            SizeRole::Frame => f.write_str("frame"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A size was zero, negative or non-finite.
    #[error("{role} size {width}x{height} must be finite and strictly positive")]
    InvalidSize {
        role: SizeRole,
        width: f32,
        height: f32,
    },

    #[error("unknown aspect mode {0:?} (expected \"fit\" or \"fill\")")]
    UnknownMode(String),
}
