//! Example views built on the gitlive layout engine.

/// The git dashboard view.
pub mod dashboard;
