//! The node tree and the content API used to build it.
//!
//! A node is either a leaf holding text or a container holding children,
//! never both. Children are owned by their parent and laid out in insertion
//! order. Mutating the tree never measures anything; all sizing happens when
//! the tree is drawn.

use geom::Axis;

use crate::{
    error::{Error, Result},
    style::{AttrSet, Color},
};

/// The axis along which a container lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Children sit side by side, left to right.
    Columns,
    /// Children stack top to bottom.
    #[default]
    Rows,
}

impl Direction {
    /// The main axis for this direction.
    pub fn axis(self) -> Axis {
        match self {
            Self::Columns => Axis::Horizontal,
            Self::Rows => Axis::Vertical,
        }
    }
}

/// Whether children that overflow the main axis start a new line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wrap {
    /// All children share one line, overflowing if they must.
    #[default]
    NoWrap,
    /// Children flow onto successive lines.
    Wrap,
}

/// Space reserved inside a node's rectangle before its content is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    /// Rows above the content.
    pub top: u32,
    /// Rows below the content.
    pub bottom: u32,
    /// Columns left of the content.
    pub left: u32,
    /// Columns right of the content.
    pub right: u32,
}

impl Padding {
    /// Construct padding from explicit sides.
    pub fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same padding on every side.
    pub fn uniform(n: u32) -> Self {
        Self::new(n, n, n, n)
    }

    /// Padding on the left side only.
    pub fn left(n: u32) -> Self {
        Self {
            left: n,
            ..Self::default()
        }
    }

    /// Padding on the left and right sides.
    pub fn sides(left: u32, right: u32) -> Self {
        Self {
            left,
            right,
            ..Self::default()
        }
    }

    /// Total padding consumed along an axis.
    pub fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.left.saturating_add(self.right),
            Axis::Vertical => self.top.saturating_add(self.bottom),
        }
    }
}

/// A styleable rectangle in the layout tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// The axis along which children are laid out.
    pub direction: Direction,
    /// Whether children wrap onto new lines.
    pub wrap: Wrap,
    /// Fixed minimum extent along the parent's main axis.
    pub basis: u32,
    /// Share of leftover space along the parent's main axis. Zero means the
    /// node does not grow.
    pub expand: u32,
    /// Derive the minimum extent from content and children rather than
    /// from `basis` alone.
    pub fit_content: bool,
    /// Padding applied before content is placed.
    pub padding: Padding,
    /// Color tag. `None` inherits the nearest ancestor's color.
    pub color: Option<Color>,
    /// Attribute tags, combined with every ancestor's attributes.
    pub attrs: AttrSet,
    /// Text content. Present only on leaves.
    content: Option<String>,
    /// Owned children, in layout order. Empty on leaves.
    children: Vec<Self>,
}

/// Log and construct a precondition violation.
fn invalid(msg: &str) -> Error {
    tracing::error!("layout precondition violated: {msg}");
    Error::Invalid(msg.into())
}

impl Node {
    /// A fit-content leaf holding `text`.
    fn text(text: &str, color: Option<Color>, attrs: AttrSet) -> Self {
        Self {
            fit_content: true,
            color,
            attrs,
            content: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// The node's text, if it is a leaf.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Is this node a text leaf?
    pub fn is_leaf(&self) -> bool {
        self.content.is_some()
    }

    /// The node's children, in layout order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Mutable access to the node's children. The list itself cannot be
    /// grown through this slice; use the append methods.
    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Push a child, reporting allocation failure instead of aborting.
    fn push(&mut self, child: Self) -> Result<&mut Self> {
        if self.content.is_some() {
            return Err(invalid("cannot append a child to a text node"));
        }
        self.children.try_reserve(1).map_err(|e| {
            tracing::error!("node allocation failed: {e}");
            Error::Alloc(e.to_string())
        })?;
        let idx = self.children.len();
        self.children.push(child);
        Ok(&mut self.children[idx])
    }

    /// Append a zero-valued container child and return it for styling.
    pub fn append_child(&mut self) -> Result<&mut Self> {
        self.push(Self::default())
    }

    /// Append an unstyled text leaf.
    pub fn append_text(&mut self, text: &str) -> Result<&mut Self> {
        self.append_styled_text(text, None, AttrSet::default())
    }

    /// Append a text leaf with its own color and attributes.
    pub fn append_styled_text(
        &mut self,
        text: &str,
        color: Option<Color>,
        attrs: AttrSet,
    ) -> Result<&mut Self> {
        self.push(Self::text(text, color, attrs))
    }

    /// Turn a childless node into a text leaf, or replace a leaf's text.
    pub fn set_content(&mut self, text: &str) -> Result<()> {
        if !self.children.is_empty() {
            return Err(invalid("cannot set text on a node with children"));
        }
        self.content = Some(text.to_string());
        Ok(())
    }

    /// Destroy every descendant of this node. Calling this on a node with no
    /// children does nothing.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Set the layout direction.
    pub fn with_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Set the wrap mode.
    pub fn with_wrap(&mut self, wrap: Wrap) -> &mut Self {
        self.wrap = wrap;
        self
    }

    /// Set the basis.
    pub fn with_basis(&mut self, basis: u32) -> &mut Self {
        self.basis = basis;
        self
    }

    /// Set the expand weight.
    pub fn with_expand(&mut self, expand: u32) -> &mut Self {
        self.expand = expand;
        self
    }

    /// Set fit-content sizing.
    pub fn with_fit_content(&mut self, fit_content: bool) -> &mut Self {
        self.fit_content = fit_content;
        self
    }

    /// Set the padding.
    pub fn with_padding(&mut self, padding: Padding) -> &mut Self {
        self.padding = padding;
        self
    }

    /// Set the color tag.
    pub fn with_color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Set the attribute tags.
    pub fn with_attrs(&mut self, attrs: AttrSet) -> &mut Self {
        self.attrs = attrs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Attr;

    #[test]
    fn append_child_is_zero_valued() {
        let mut root = Node::default();
        let child = root.append_child().unwrap();
        assert_eq!(*child, Node::default());
        assert!(!child.is_leaf());
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn append_text_makes_fit_content_leaf() {
        let mut root = Node::default();
        let leaf = root
            .append_styled_text("hi", Some(Color::Green), AttrSet::new(Attr::Dim))
            .unwrap();
        assert!(leaf.is_leaf());
        assert!(leaf.fit_content);
        assert_eq!(leaf.content(), Some("hi"));
        assert_eq!(leaf.color, Some(Color::Green));
        assert!(leaf.attrs.dim);
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut root = Node::default();
        for t in ["a", "b", "c"] {
            root.append_text(t).unwrap();
        }
        let texts: Vec<_> = root.children().iter().filter_map(|c| c.content()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn leaf_rejects_children() {
        let mut root = Node::default();
        let leaf = root.append_text("x").unwrap();
        assert!(matches!(leaf.append_child(), Err(Error::Invalid(_))));
        assert!(matches!(leaf.append_text("y"), Err(Error::Invalid(_))));
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn container_rejects_content() {
        let mut root = Node::default();
        root.append_child().unwrap();
        assert!(matches!(root.set_content("x"), Err(Error::Invalid(_))));
        assert_eq!(root.content(), None);

        let mut empty = Node::default();
        empty.set_content("x").unwrap();
        assert_eq!(empty.content(), Some("x"));
    }

    #[test]
    fn clear_children_is_recursive_and_idempotent() {
        let mut root = Node::default();
        let mid = root.append_child().unwrap();
        mid.append_text("deep").unwrap();
        mid.append_child().unwrap().append_text("deeper").unwrap();
        root.clear_children();
        assert!(root.children().is_empty());
        root.clear_children();
        assert!(root.children().is_empty());
        root.append_text("again").unwrap();
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn builders_chain() {
        let mut root = Node::default();
        let n = root
            .append_child()
            .unwrap()
            .with_direction(Direction::Columns)
            .with_wrap(Wrap::Wrap)
            .with_basis(2)
            .with_expand(3)
            .with_fit_content(true)
            .with_padding(Padding::left(1))
            .with_color(Color::Blue)
            .with_attrs(AttrSet::new(Attr::Bold));
        assert_eq!(n.direction, Direction::Columns);
        assert_eq!(n.wrap, Wrap::Wrap);
        assert_eq!((n.basis, n.expand), (2, 3));
        assert!(n.fit_content);
        assert_eq!(n.padding.along(Axis::Horizontal), 1);
        assert_eq!(n.padding.along(Axis::Vertical), 0);
        assert_eq!(n.color, Some(Color::Blue));
        assert!(n.attrs.bold);
    }

    #[test]
    fn direction_axes() {
        assert_eq!(Direction::Columns.axis(), Axis::Horizontal);
        assert_eq!(Direction::Rows.axis(), Axis::Vertical);
        assert_eq!(Direction::default(), Direction::Rows);
    }
}
