//! Cell geometry primitives used across git-live.

/// Width/height size type.
mod expanse;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use rect::Rect;

/// One of the two axes of the character grid.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Axis {
    /// Columns, measured as a width.
    Horizontal,
    /// Rows, measured as a height.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
