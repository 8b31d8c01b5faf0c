/// Buffer matching helpers.
pub mod buf;
/// In-memory painter.
pub mod canvas;

pub use buf::BufTest;
pub use canvas::{Canvas, Cell};
