use geom::Rect;

use crate::{
    error::Result,
    node::Node,
    paint::Paint,
    walk::{self, Inherited},
};

/// A layout owns the root of a node tree and draws it on demand.
///
/// The tree is meant to be rebuilt between frames: mutate it through
/// [`Layout::root_mut`], then call [`Layout::draw`] with a painter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// The root container.
    root: Node,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    /// Create a layout with an empty root. The root expands to fill the draw
    /// rect and fits its content.
    pub fn new() -> Self {
        let mut root = Node::default();
        root.with_expand(1).with_fit_content(true);
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Mutable access to the root node.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Drop every node below the root. The root's own style is kept.
    pub fn clear(&mut self) {
        self.root.clear_children();
    }

    /// Measure, place and paint the whole tree into `rect`.
    ///
    /// The first error from the painter aborts the pass and is returned; the
    /// display may be left partially painted.
    pub fn draw(&self, paint: &mut dyn Paint, rect: Rect) -> Result<()> {
        tracing::debug!(
            ?rect,
            children = self.root.children().len(),
            "draw pass"
        );
        walk::draw_node(&self.root, rect, Inherited::default(), paint).inspect_err(|e| {
            tracing::error!("draw pass aborted: {e}");
        })
    }
}
