//! Main-axis distribution for a run of siblings.
//!
//! All arithmetic is integral. When any sibling expands, the final extents
//! sum exactly to the budget: cells that do not divide evenly are handed out
//! one at a time to the earliest expanding siblings.

use geom::Rect;

use crate::{
    measure::required_extent,
    node::{Direction, Node},
};

/// Final main-axis extents for `nodes` laid out along `direction` in `rect`.
///
/// If the siblings' minimums exceed the rect, the budget grows to their sum
/// and the run overflows; [`place`] clips the result.
pub fn distribute(nodes: &[Node], direction: Direction, rect: Rect) -> Vec<u32> {
    let axis = direction.axis();
    let bounds = rect.expanse();
    let required: Vec<u32> = nodes
        .iter()
        .map(|n| required_extent(n, axis, bounds))
        .collect();

    let mut min_sum = 0u32;
    let mut expand_sum = 0u32;
    let mut expanding = 0u32;
    for (n, r) in nodes.iter().zip(&required) {
        min_sum = min_sum.saturating_add(n.basis.max(*r));
        expand_sum = expand_sum.saturating_add(n.expand);
        if n.expand > 0 {
            expanding += 1;
        }
    }

    let budget = rect.extent(axis).max(min_sum);
    let per_weight = (budget - min_sum).checked_div(expand_sum).unwrap_or(0);

    let base: Vec<u32> = nodes
        .iter()
        .zip(&required)
        .map(|(n, r)| {
            n.expand
                .saturating_mul(per_weight)
                .saturating_add(n.basis)
                .max(*r)
        })
        .collect();
    let used = base.iter().fold(0u32, |acc, b| acc.saturating_add(*b));
    let leftover = budget.saturating_sub(used);
    let share = leftover.checked_div(expanding).unwrap_or(0);
    let extra = leftover.checked_rem(expanding).unwrap_or(0);

    let mut nth = 0;
    nodes
        .iter()
        .zip(base)
        .map(|(n, b)| {
            if n.expand == 0 {
                return b;
            }
            let bonus = u32::from(nth < extra);
            nth += 1;
            b.saturating_add(share).saturating_add(bonus)
        })
        .collect()
}

/// Sub-rects for `nodes` laid out consecutively along `direction` in `rect`.
///
/// Siblings that would start at or past the end of the rect are not placed,
/// so the result may be shorter than `nodes`. A placed sibling is clipped to
/// the space remaining and spans the full cross extent of the rect.
pub fn place(nodes: &[Node], direction: Direction, rect: Rect) -> Vec<Rect> {
    let axis = direction.axis();
    let end = rect.end(axis);
    let mut pos = rect.origin(axis);
    let mut placed = Vec::with_capacity(nodes.len());
    for extent in distribute(nodes, direction, rect) {
        if pos >= end {
            break;
        }
        placed.push(rect.with_span(axis, pos, extent.min(end - pos)));
        pos = pos.saturating_add(extent);
    }
    placed
}
