use super::{Axis, Expanse};

/// A rectangle of character cells, anchored at its top-left cell.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Leftmost column.
    pub col: u32,
    /// Topmost row.
    pub row: u32,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Rect {
    /// Construct a rectangle from its origin and size.
    pub fn new(col: u32, row: u32, width: u32, height: u32) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// The size of this rect.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.width, self.height)
    }

    /// The start coordinate along an axis.
    pub fn origin(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.col,
            Axis::Vertical => self.row,
        }
    }

    /// The extent along an axis.
    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// One past the last coordinate along an axis.
    pub fn end(&self, axis: Axis) -> u32 {
        self.origin(axis).saturating_add(self.extent(axis))
    }

    /// A copy of this rect with origin and extent along `axis` replaced. The
    /// other axis is left untouched.
    pub fn with_span(self, axis: Axis, start: u32, extent: u32) -> Self {
        match axis {
            Axis::Horizontal => Self {
                col: start,
                width: extent,
                ..self
            },
            Axis::Vertical => Self {
                row: start,
                height: extent,
                ..self
            },
        }
    }

    /// Shrink the rect by the given insets. Insets larger than the rect
    /// leave a zero extent rather than underflowing.
    pub fn inset(&self, top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            col: self.col.saturating_add(left),
            row: self.row.saturating_add(top),
            width: self.width.saturating_sub(left.saturating_add(right)),
            height: self.height.saturating_sub(top.saturating_add(bottom)),
        }
    }

    /// Does this rect contain the cell at (col, row)?
    pub fn contains_cell(&self, col: u32, row: u32) -> bool {
        col >= self.col
            && row >= self.row
            && col < self.end(Axis::Horizontal)
            && row < self.end(Axis::Vertical)
    }

    /// The overlap of two rects, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let left = self.col.max(other.col);
        let top = self.row.max(other.row);
        let right = self.end(Axis::Horizontal).min(other.end(Axis::Horizontal));
        let bottom = self.end(Axis::Vertical).min(other.end(Axis::Vertical));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self::new(left, top, right - left, bottom - top))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn inset_saturates() {
        let r = Rect::new(2, 3, 10, 4);
        assert_eq!(r.inset(1, 1, 2, 3), Rect::new(4, 4, 5, 2));
        assert_eq!(r.inset(3, 3, 0, 0), Rect::new(2, 6, 10, 0));
        assert_eq!(r.inset(0, 0, 20, 0), Rect::new(22, 3, 0, 4));
    }

    #[test]
    fn span_by_axis() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.with_span(Axis::Horizontal, 5, 6), Rect::new(5, 2, 6, 4));
        assert_eq!(r.with_span(Axis::Vertical, 5, 6), Rect::new(1, 5, 3, 6));
        assert_eq!(r.origin(Axis::Vertical), 2);
        assert_eq!(r.end(Axis::Horizontal), 4);
    }

    #[test]
    fn intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(&Rect::new(5, 5, 10, 10)),
            Some(Rect::new(5, 5, 5, 5))
        );
        assert_eq!(a.intersect(&Rect::new(10, 0, 1, 1)), None);
        assert!(a.contains_cell(9, 9));
        assert!(!a.contains_cell(10, 9));
    }

    proptest! {
        #[test]
        fn intersection_lies_in_both(
            a in (0u32..50, 0u32..50, 0u32..50, 0u32..50),
            b in (0u32..50, 0u32..50, 0u32..50, 0u32..50),
        ) {
            let a = Rect::new(a.0, a.1, a.2, a.3);
            let b = Rect::new(b.0, b.1, b.2, b.3);
            if let Some(i) = a.intersect(&b) {
                prop_assert!(a.contains_cell(i.col, i.row));
                prop_assert!(b.contains_cell(i.col, i.row));
                prop_assert!(a.contains_cell(i.col + i.width - 1, i.row + i.height - 1));
                prop_assert!(b.contains_cell(i.col + i.width - 1, i.row + i.height - 1));
            }
        }
    }
}
