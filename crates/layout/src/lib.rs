//! A box layout engine for character-grid dashboards.
//!
//! The caller builds a tree of styleable nodes under a [`Layout`] root, then
//! draws it into a rectangle with a [`Paint`] implementation. Nodes size
//! themselves from a fixed basis, from their content, or from a share of the
//! leftover space along their parent's main axis. Containers may wrap their
//! children onto several lines.
//!
//! # Module Organization
//!
//! - [`node`] - The node tree and content API
//! - [`measure`] - Intrinsic size measurement
//! - [`flex`] - Main-axis distribution for a run of siblings
//! - [`walk`] - Line partitioning and the render walk
//! - [`backend`] - Painters for real terminals

#![warn(missing_docs)]

/// Painter backends.
pub mod backend;
/// Error types.
pub mod error;
/// Sibling distribution.
pub mod flex;
/// The layout root and draw driver.
mod layout;
/// Size measurement.
pub mod measure;
/// The node tree.
pub mod node;
/// The paint interface.
pub mod paint;
/// Style tags.
pub mod style;
/// Render walk.
pub mod walk;

/// Test painters and canvas matchers.
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
pub use geom;
pub use layout::Layout;
pub use node::{Direction, Node, Padding, Wrap};
pub use paint::{Paint, paint_fn};
pub use style::{Attr, AttrSet, Color, Pen};
