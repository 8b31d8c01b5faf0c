//! Intrinsic size measurement.
//!
//! Measurement is a pure function of the subtree and a bounding size. The
//! bounding size is passed unchanged to children; padding is added after the
//! children are measured, never subtracted from the bounds.

use geom::{Axis, Expanse};

use crate::node::{Node, Wrap};

/// Minimum width of a node when laid out within `bounds`.
pub fn min_width(node: &Node, bounds: Expanse) -> u32 {
    min_extent(node, Axis::Horizontal, bounds)
}

/// Minimum height of a node when laid out within `bounds`.
pub fn min_height(node: &Node, bounds: Expanse) -> u32 {
    min_extent(node, Axis::Vertical, bounds)
}

/// Minimum extent of a node along `axis` when laid out within `bounds`.
pub fn min_extent(node: &Node, axis: Axis, bounds: Expanse) -> u32 {
    let sz = if let Some(text) = node.content() {
        text_extent(text, axis)
    } else if node.wrap == Wrap::Wrap {
        overflow_extent(node, axis, bounds)
    } else if node.direction.axis() == axis {
        node.children().iter().fold(0u32, |acc, c| {
            acc.saturating_add(min_extent(c, axis, bounds))
        })
    } else {
        node.children()
            .iter()
            .map(|c| min_extent(c, axis, bounds))
            .max()
            .unwrap_or(0)
    };
    sz.saturating_add(node.padding.along(axis))
}

/// The extent a sibling demands along `axis` before any expansion: its
/// measured minimum if it fits its content, zero otherwise.
pub fn required_extent(node: &Node, axis: Axis, bounds: Expanse) -> u32 {
    if node.fit_content {
        min_extent(node, axis, bounds)
    } else {
        0
    }
}

/// Extent of a block of text. Width is the longest line in characters.
/// Height counts line breaks, ignoring a single trailing break.
fn text_extent(text: &str, axis: Axis) -> u32 {
    match axis {
        Axis::Horizontal => text
            .split('\n')
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .try_into()
            .unwrap_or(u32::MAX),
        Axis::Vertical => {
            let breaks = text.matches('\n').count();
            let breaks = if text.ends_with('\n') {
                breaks - 1
            } else {
                breaks
            };
            u32::try_from(breaks).unwrap_or(u32::MAX).saturating_add(1)
        }
    }
}

/// Minimum extent of a wrapping container.
fn overflow_extent(node: &Node, axis: Axis, bounds: Expanse) -> u32 {
    let main = node.direction.axis();
    if axis == main.cross() {
        return packed_cross(node, bounds.extent(main), bounds, false);
    }

    let bound = bounds.extent(main);
    let cross_bound = bounds.extent(main.cross());
    let mains: Vec<u32> = node
        .children()
        .iter()
        .map(|c| min_extent(c, main, bounds))
        .collect();
    let one_line = mains.iter().fold(0u32, |acc, m| acc.saturating_add(*m));

    let mut sz = mains.iter().copied().max().unwrap_or(0);
    while sz < bound {
        sz += 1;
        let cross = packed_cross(node, sz, bounds, true);
        tracing::trace!(probe = sz, cross, cross_bound, "overflow search");
        if cross <= cross_bound {
            break;
        }
        if sz >= one_line {
            // Every child already shares one line, so no longer line can fit.
            return bound;
        }
    }
    sz
}

/// Greedily pack children into lines of at most `line_len` along the main
/// axis and return the summed cross extent of the lines.
///
/// When `narrow` is set, each child's cross extent is measured with the
/// main component of the bounds replaced by the child's own main extent.
fn packed_cross(node: &Node, line_len: u32, bounds: Expanse, narrow: bool) -> u32 {
    let main = node.direction.axis();
    let cross = main.cross();
    let mut total = 0u32;
    let mut line_main = 0u32;
    let mut line_cross = 0u32;
    for c in node.children() {
        let m = min_extent(c, main, bounds);
        if line_main.saturating_add(m) > line_len {
            total = total.saturating_add(line_cross);
            line_main = 0;
            line_cross = 0;
        }
        let child_bounds = if narrow {
            bounds.with_extent(main, m)
        } else {
            bounds
        };
        line_cross = line_cross.max(min_extent(c, cross, child_bounds));
        line_main = line_main.saturating_add(m);
    }
    total.saturating_add(line_cross)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Direction, Padding};

    fn leaf(text: &str) -> Node {
        let mut n = Node::default();
        n.set_content(text).unwrap();
        n
    }

    #[test]
    fn text() {
        let b = Expanse::unbounded();
        assert_eq!(min_width(&leaf("ab\ncde\n"), b), 3);
        assert_eq!(min_height(&leaf("ab\ncde\n"), b), 2);
        assert_eq!(min_height(&leaf("ab\ncde"), b), 2);
        assert_eq!(min_height(&leaf("a\n\nb"), b), 3);
        assert_eq!(min_height(&leaf(""), b), 1);
        assert_eq!(min_height(&leaf("\n"), b), 1);
        assert_eq!(min_width(&leaf(""), b), 0);
        assert_eq!(min_width(&leaf("héllo"), b), 5);
    }

    #[test]
    fn containers() {
        let b = Expanse::new(80, 24);
        let mut row = Node::default();
        row.with_direction(Direction::Columns);
        row.append_text("abc").unwrap();
        row.append_text("de\nf").unwrap();
        assert_eq!(min_width(&row, b), 5);
        assert_eq!(min_height(&row, b), 2);

        let mut col = Node::default();
        col.append_text("abc").unwrap();
        col.append_text("de\nf").unwrap();
        assert_eq!(min_width(&col, b), 3);
        assert_eq!(min_height(&col, b), 3);

        assert_eq!(min_width(&Node::default(), b), 0);
        assert_eq!(min_height(&Node::default(), b), 0);
    }

    #[test]
    fn padding_adds() {
        let b = Expanse::new(80, 24);
        let mut n = Node::default();
        n.with_padding(Padding::new(1, 2, 3, 4));
        n.append_text("ab").unwrap();
        assert_eq!(min_width(&n, b), 9);
        assert_eq!(min_height(&n, b), 4);
    }

    #[test]
    fn required_ignores_unfit() {
        let b = Expanse::new(80, 24);
        let mut n = Node::default();
        n.append_text("abcd").unwrap();
        assert_eq!(required_extent(&n, Axis::Horizontal, b), 0);
        n.fit_content = true;
        assert_eq!(required_extent(&n, Axis::Horizontal, b), 4);
    }

    #[test]
    fn wrap_cross_axis_packs_greedily() {
        // Three 4-wide children in a 10-wide bound: two lines.
        let mut n = Node::default();
        n.with_direction(Direction::Columns).with_wrap(Wrap::Wrap);
        n.append_text("aaaa").unwrap();
        n.append_text("bbbb\nbbbb").unwrap();
        n.append_text("cccc").unwrap();
        assert_eq!(min_height(&n, Expanse::new(10, 24)), 3);
        assert_eq!(min_height(&n, Expanse::new(12, 24)), 2);
        assert_eq!(min_height(&n, Expanse::new(4, 24)), 4);
    }

    #[test]
    fn wrap_cross_axis_resets_line_extent() {
        // A tall child on the first line must not inflate the second.
        let mut n = Node::default();
        n.with_direction(Direction::Columns).with_wrap(Wrap::Wrap);
        n.append_text("aaaa\na\na").unwrap();
        n.append_text("bbbb").unwrap();
        assert_eq!(min_height(&n, Expanse::new(4, 24)), 4);
    }

    #[test]
    fn wrap_main_axis_searches() {
        // Six one-row children stacked in rows, bounded to width 4.
        let mut n = Node::default();
        n.with_wrap(Wrap::Wrap);
        for _ in 0..6 {
            n.append_text("ab").unwrap();
        }
        // Columns of height 3 give two columns of width 2, which fits 4.
        assert_eq!(min_height(&n, Expanse::new(4, 24)), 3);
        // Wide enough for three columns: the first probe already fits.
        assert_eq!(min_height(&n, Expanse::new(6, 24)), 2);
        // Never fits: the search runs to the bound.
        assert_eq!(min_height(&n, Expanse::new(1, 24)), 24);
        // A bound at or below the tallest child ends the search at once.
        assert_eq!(min_height(&n, Expanse::new(1, 1)), 1);
    }

    #[test]
    fn wrap_main_axis_unbounded_terminates() {
        let mut n = Node::default();
        n.with_direction(Direction::Columns).with_wrap(Wrap::Wrap);
        n.append_text("abc\nd\ne").unwrap();
        assert_eq!(min_width(&n, Expanse::new(u32::MAX, 1)), u32::MAX);
        assert_eq!(min_width(&n, Expanse::unbounded()), 4);
    }
}
