use geom::{Axis, Expanse, Rect};

use crate::{
    error::{Error, Result},
    paint::Paint,
    style::{AttrSet, Color},
};

/// One character cell of a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph in the cell. Unpainted cells hold a space.
    pub ch: char,
    /// The last color applied to the cell by a fill or a text write.
    pub color: Option<Color>,
    /// Attributes of the text written into the cell.
    pub attrs: AttrSet,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            color: None,
            attrs: AttrSet::default(),
        }
    }
}

/// An in-memory painter that records characters, colors and attributes per
/// cell.
///
/// By default writes outside the canvas are clipped, like the terminal
/// painter. A strict canvas instead fails the write with [`Error::Render`],
/// which makes tests notice any paint call that leaves the surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Canvas size.
    size: Expanse,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    /// Reject out-of-bounds writes instead of clipping them.
    strict: bool,
    /// Number of text calls received.
    pub text_calls: usize,
    /// Number of fill calls received.
    pub fill_calls: usize,
}

impl Canvas {
    /// A clipping canvas of `w` by `h` cells.
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            size: Expanse::new(w, h),
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
            strict: false,
            text_calls: 0,
            fill_calls: 0,
        }
    }

    /// A canvas of `w` by `h` cells that rejects out-of-bounds writes.
    pub fn strict(w: u32, h: u32) -> Self {
        Self {
            strict: true,
            ..Self::new(w, h)
        }
    }

    /// The canvas size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// The whole canvas as a rect at the origin.
    pub fn rect(&self) -> Rect {
        self.size.rect()
    }

    /// The cell at (`col`, `row`), if it lies on the canvas.
    pub fn get(&self, col: u32, row: u32) -> Option<&Cell> {
        if col >= self.size.w || row >= self.size.h {
            return None;
        }
        self.cells
            .get(row as usize * self.size.w as usize + col as usize)
    }

    /// Mutable access to a cell.
    fn get_mut(&mut self, col: u32, row: u32) -> Option<&mut Cell> {
        if col >= self.size.w || row >= self.size.h {
            return None;
        }
        self.cells
            .get_mut(row as usize * self.size.w as usize + col as usize)
    }

    /// The characters of each row.
    pub fn lines(&self) -> Vec<String> {
        (0..self.size.h)
            .map(|row| self.line(row).unwrap_or_default())
            .collect()
    }

    /// The characters of one row.
    pub fn line(&self, row: u32) -> Option<String> {
        if row >= self.size.h {
            return None;
        }
        Some(
            (0..self.size.w)
                .filter_map(|col| self.get(col, row).map(|c| c.ch))
                .collect(),
        )
    }

    /// The colors of one row.
    pub fn colors(&self, row: u32) -> Vec<Option<Color>> {
        (0..self.size.w)
            .filter_map(|col| self.get(col, row).map(|c| c.color))
            .collect()
    }

    /// Reset every cell and the call counters.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.text_calls = 0;
        self.fill_calls = 0;
    }

    /// Fail a strict write, or report that a lax one should be clipped.
    fn out_of_bounds(&self, what: &str) -> Result<()> {
        if self.strict {
            Err(Error::Render(format!("{what} outside canvas")))
        } else {
            Ok(())
        }
    }
}

impl Paint for Canvas {
    fn text(
        &mut self,
        text: &str,
        max_len: u32,
        col: u32,
        row: u32,
        color: Option<Color>,
        attrs: AttrSet,
    ) -> Result<()> {
        self.text_calls += 1;
        if row >= self.size.h || col.saturating_add(max_len) > self.size.w {
            self.out_of_bounds("text")?;
        }
        for (i, ch) in (0..max_len).zip(text.chars()) {
            if let Some(cell) = self.get_mut(col.saturating_add(i), row) {
                *cell = Cell { ch, color, attrs };
            }
        }
        Ok(())
    }

    fn fill(&mut self, rect: Rect, color: Option<Color>) -> Result<()> {
        self.fill_calls += 1;
        if rect.end(Axis::Horizontal) > self.size.w || rect.end(Axis::Vertical) > self.size.h {
            self.out_of_bounds("fill")?;
        }
        if color.is_none() {
            return Ok(());
        }
        if let Some(r) = rect.intersect(&self.rect()) {
            for row in r.row..r.row + r.height {
                for col in r.col..r.col + r.width {
                    if let Some(cell) = self.get_mut(col, row) {
                        cell.color = color;
                    }
                }
            }
        }
        Ok(())
    }
}
