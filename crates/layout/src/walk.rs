//! The render walk: resolves style, partitions wrapping containers into
//! lines, distributes each run and recurses, calling the painter as it goes.

use std::ops::Range;

use geom::Rect;

use crate::{
    error::Result,
    flex,
    measure::required_extent,
    node::{Node, Wrap},
    paint::Paint,
    style::{AttrSet, Color},
};

/// Style handed down from ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inherited {
    /// The nearest ancestor color, if any.
    pub color: Option<Color>,
    /// Every attribute set on an ancestor.
    pub attrs: AttrSet,
}

/// One line of a wrapping container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Indices of the children on this line.
    pub children: Range<usize>,
    /// The rect the line's children are distributed into.
    pub rect: Rect,
}

/// Draw `node` and its subtree into `rect`.
pub fn draw_node(
    node: &Node,
    rect: Rect,
    inherited: Inherited,
    paint: &mut dyn Paint,
) -> Result<()> {
    let style = Inherited {
        color: node.color.or(inherited.color),
        attrs: node.attrs | inherited.attrs,
    };
    paint.fill(rect, style.color)?;

    let p = node.padding;
    let inner = rect.inset(p.top, p.bottom, p.left, p.right);

    if let Some(text) = node.content() {
        for (i, line) in (0..inner.height).zip(text.split('\n')) {
            paint.text(
                line,
                inner.width,
                inner.col,
                inner.row.saturating_add(i),
                style.color,
                style.attrs,
            )?;
        }
    } else if node.wrap == Wrap::Wrap {
        for line in partition(node, inner) {
            let children = &node.children()[line.children];
            draw_run(children, node, line.rect, style, paint)?;
        }
    } else {
        draw_run(node.children(), node, inner, style, paint)?;
    }
    Ok(())
}

/// Distribute a run of siblings along the parent's direction and draw each
/// one that was placed.
fn draw_run(
    children: &[Node],
    parent: &Node,
    rect: Rect,
    style: Inherited,
    paint: &mut dyn Paint,
) -> Result<()> {
    for (child, r) in children.iter().zip(flex::place(children, parent.direction, rect)) {
        draw_node(child, r, style, paint)?;
    }
    Ok(())
}

/// Split the children of a wrapping container into lines within its
/// content rect.
///
/// A line takes children while their fit-content main extents fit the main
/// budget, and always takes at least one. Lines advance along the cross axis
/// by the tallest member of the previous line. The final line is stretched
/// over whatever cross space remains.
pub fn partition(node: &Node, rect: Rect) -> Vec<Line> {
    let main = node.direction.axis();
    let cross = main.cross();
    let budget = rect.extent(main);
    let cross_budget = rect.extent(cross);
    let bounds = rect.expanse();
    let children = node.children();

    let mut lines = Vec::new();
    let mut first = 0;
    let mut consumed = 0u32;
    while first < children.len() && consumed <= cross_budget {
        let mut next = first;
        let mut line_main = 0u32;
        let mut line_cross = 0u32;
        while let Some(c) = children.get(next) {
            let m = required_extent(c, main, bounds);
            if next > first && line_main.saturating_add(m) > budget {
                break;
            }
            line_main = line_main.saturating_add(m);
            line_cross = line_cross.max(required_extent(c, cross, bounds));
            next += 1;
        }

        let last = next == children.len() || consumed.saturating_add(line_cross) > cross_budget;
        let extent = if last {
            cross_budget - consumed
        } else {
            line_cross
        };
        let start = rect.origin(cross).saturating_add(consumed);
        tracing::trace!(first, next, start, extent, last, "wrap line");
        lines.push(Line {
            children: first..next,
            rect: rect.with_span(cross, start, extent),
        });

        first = next;
        consumed = consumed.saturating_add(line_cross);
    }
    lines
}
