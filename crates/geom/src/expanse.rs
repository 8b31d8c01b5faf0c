use super::{Axis, Rect};

/// An `Expanse` is a rectangle that has a width and height but no location.
/// The layout engine uses it as the bounding size handed to measurement.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Expanse {
    /// Construct an expanse from a width and height.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// An expanse that bounds nothing. Arithmetic against it must saturate.
    pub fn unbounded() -> Self {
        Self {
            w: u32::MAX,
            h: u32::MAX,
        }
    }

    /// The extent along an axis.
    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// A copy with the extent along `axis` replaced.
    pub fn with_extent(self, axis: Axis, extent: u32) -> Self {
        match axis {
            Axis::Horizontal => Self { w: extent, ..self },
            Axis::Vertical => Self { h: extent, ..self },
        }
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, but a location at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_by_axis() {
        let e = Expanse::new(7, 3);
        assert_eq!(e.extent(Axis::Horizontal), 7);
        assert_eq!(e.extent(Axis::Vertical), 3);
        assert_eq!(e.with_extent(Axis::Vertical, 9), Expanse::new(7, 9));
        assert_eq!(e.with_extent(Axis::Horizontal, 0), Expanse::new(0, 3));
    }

    #[test]
    fn rect_round_trip() {
        let r = Rect::new(4, 5, 6, 7);
        assert_eq!(r.expanse(), Expanse::new(6, 7));
        assert_eq!(Expanse::new(6, 7).rect(), Rect::new(0, 0, 6, 7));
    }
}
