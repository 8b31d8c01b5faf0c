/// Crossterm painter implementation.
pub mod crossterm;
