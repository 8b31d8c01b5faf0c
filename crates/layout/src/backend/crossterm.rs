use std::io::{self, Stderr, Write};

use crossterm::{QueueableCommand, cursor as ccursor, style, terminal};
use geom::{Expanse, Rect};

use crate::{
    error::{Error, Result},
    paint::Paint,
    style::{AttrSet, Color},
};

/// Translate a layout color into a crossterm color.
fn translate_color(c: Color) -> style::Color {
    match c {
        Color::Black => style::Color::Black,
        Color::DarkGrey => style::Color::DarkGrey,
        Color::Red => style::Color::Red,
        Color::DarkRed => style::Color::DarkRed,
        Color::Green => style::Color::Green,
        Color::DarkGreen => style::Color::DarkGreen,
        Color::Yellow => style::Color::Yellow,
        Color::DarkYellow => style::Color::DarkYellow,
        Color::Blue => style::Color::Blue,
        Color::DarkBlue => style::Color::DarkBlue,
        Color::Magenta => style::Color::Magenta,
        Color::DarkMagenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::Cyan,
        Color::DarkCyan => style::Color::DarkCyan,
        Color::White => style::Color::White,
        Color::Grey => style::Color::Grey,
        Color::Rgb { r, g, b } => style::Color::Rgb { r, g, b },
        Color::AnsiValue(a) => style::Color::AnsiValue(a),
        Color::Pair { fg, .. } => fg
            .color()
            .map(translate_color)
            .unwrap_or(style::Color::Reset),
    }
}

/// Map IO results into layout errors.
fn translate_result<T>(e: io::Result<T>) -> Result<T> {
    match e {
        Ok(t) => Ok(t),
        Err(e) => {
            tracing::error!("terminal write failed: {e}");
            Err(Error::Render(e.to_string()))
        }
    }
}

/// Clamp a cell coordinate to crossterm's 16-bit range.
fn cell(v: u32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// A painter that queues crossterm commands to a writer.
///
/// Writes are clipped to the painter's surface rather than rejected: text is
/// truncated at the right edge, rows past the bottom are skipped and fills
/// are intersected with the surface. Nothing reaches the terminal until
/// [`TermPaint::flush`].
pub struct TermPaint<W: Write> {
    /// Output handle.
    fp: W,
    /// Size of the drawable surface.
    size: Expanse,
}

impl TermPaint<Stderr> {
    /// A painter on stderr, sized to the current terminal.
    pub fn stderr() -> Result<Self> {
        let (w, h) = translate_result(terminal::size())?;
        Ok(Self::new(io::stderr(), Expanse::new(w.into(), h.into())))
    }
}

impl<W: Write> TermPaint<W> {
    /// Construct a painter over `fp` with a surface of `size` cells.
    pub fn new(fp: W, size: Expanse) -> Self {
        Self { fp, size }
    }

    /// The drawable surface size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Change the surface size, typically after a terminal resize.
    pub fn resize(&mut self, size: Expanse) {
        self.size = size;
    }

    /// Consume the painter and return its writer.
    pub fn into_inner(self) -> W {
        self.fp
    }

    /// Flush queued output.
    pub fn flush(&mut self) -> Result<()> {
        translate_result(self.fp.flush())
    }

    /// Switch to the alternate screen with raw mode on and the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        translate_result(self.enter_io())
    }

    /// Restore the terminal state changed by [`TermPaint::enter`].
    pub fn leave(&mut self) -> Result<()> {
        translate_result(self.leave_io())
    }

    /// Clear the whole surface.
    pub fn clear(&mut self) -> Result<()> {
        translate_result(self.clear_io())
    }

    /// Reset colors and erase the screen.
    fn clear_io(&mut self) -> io::Result<()> {
        self.fp.queue(style::ResetColor)?;
        self.fp.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Enter the alternate screen.
    fn enter_io(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.fp.queue(terminal::EnterAlternateScreen)?;
        self.fp.queue(ccursor::Hide)?;
        self.fp.flush()
    }

    /// Leave the alternate screen.
    fn leave_io(&mut self) -> io::Result<()> {
        self.fp.queue(style::ResetColor)?;
        self.fp.queue(terminal::LeaveAlternateScreen)?;
        self.fp.queue(ccursor::Show)?;
        self.fp.flush()?;
        terminal::disable_raw_mode()
    }

    /// Apply a color and attributes to subsequent output.
    fn apply_style(&mut self, color: Option<Color>, attrs: AttrSet) -> io::Result<()> {
        // Reset clears colors too, so it must come first.
        self.fp
            .queue(style::SetAttribute(style::Attribute::Reset))?;
        let fg = color.and_then(Color::foreground);
        let bg = color.and_then(Color::background);
        self.fp.queue(style::SetForegroundColor(
            fg.map(translate_color).unwrap_or(style::Color::Reset),
        ))?;
        self.fp.queue(style::SetBackgroundColor(
            bg.map(translate_color).unwrap_or(style::Color::Reset),
        ))?;
        if attrs.is_empty() {
            return Ok(());
        }

        if attrs.bold {
            self.fp.queue(style::SetAttribute(style::Attribute::Bold))?;
        }
        if attrs.crossedout {
            self.fp
                .queue(style::SetAttribute(style::Attribute::CrossedOut))?;
        }
        if attrs.dim {
            self.fp.queue(style::SetAttribute(style::Attribute::Dim))?;
        }
        if attrs.italic {
            self.fp
                .queue(style::SetAttribute(style::Attribute::Italic))?;
        }
        if attrs.reverse {
            self.fp
                .queue(style::SetAttribute(style::Attribute::Reverse))?;
        }
        if attrs.underline {
            self.fp
                .queue(style::SetAttribute(style::Attribute::Underlined))?;
        }
        Ok(())
    }

    /// Write clipped text at a position.
    fn text_io(
        &mut self,
        text: &str,
        max_len: u32,
        col: u32,
        row: u32,
        color: Option<Color>,
        attrs: AttrSet,
    ) -> io::Result<()> {
        if row >= self.size.h || col >= self.size.w {
            return Ok(());
        }
        let len = max_len.min(self.size.w - col) as usize;
        let clipped: String = text.chars().take(len).collect();
        if clipped.is_empty() {
            return Ok(());
        }
        self.apply_style(color, attrs)?;
        self.fp.queue(ccursor::MoveTo(cell(col), cell(row)))?;
        self.fp.queue(style::Print(clipped))?;
        Ok(())
    }

    /// Paint the background of a clipped rect.
    fn fill_io(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        let Some(r) = rect.intersect(&self.size.rect()) else {
            return Ok(());
        };
        self.apply_style(Some(color), AttrSet::default())?;
        let blank = " ".repeat(r.width as usize);
        for row in r.row..r.row + r.height {
            self.fp.queue(ccursor::MoveTo(cell(r.col), cell(row)))?;
            self.fp.queue(style::Print(&blank))?;
        }
        Ok(())
    }
}

impl<W: Write> Paint for TermPaint<W> {
    fn text(
        &mut self,
        text: &str,
        max_len: u32,
        col: u32,
        row: u32,
        color: Option<Color>,
        attrs: AttrSet,
    ) -> Result<()> {
        translate_result(self.text_io(text, max_len, col, row, color, attrs))
    }

    fn fill(&mut self, rect: Rect, color: Option<Color>) -> Result<()> {
        match color {
            Some(c) => translate_result(self.fill_io(rect, c)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Pen;

    fn output(p: TermPaint<Vec<u8>>) -> String {
        String::from_utf8(p.into_inner()).unwrap()
    }

    #[test]
    fn text_is_clipped() {
        let mut p = TermPaint::new(Vec::new(), Expanse::new(5, 2));
        p.text("abcdefgh", 10, 2, 0, None, AttrSet::default())
            .unwrap();
        p.text("skipped", 10, 0, 2, None, AttrSet::default())
            .unwrap();
        p.text("offside", 10, 5, 0, None, AttrSet::default())
            .unwrap();
        let out = output(p);
        assert!(out.contains("abc"));
        assert!(!out.contains("abcd"));
        assert!(!out.contains("skipped"));
        assert!(!out.contains("off"));
    }

    #[test]
    fn max_len_limits_text() {
        let mut p = TermPaint::new(Vec::new(), Expanse::new(80, 2));
        p.text("abcdef", 2, 0, 0, None, AttrSet::default()).unwrap();
        let out = output(p);
        assert!(out.contains("ab"));
        assert!(!out.contains("abc"));
    }

    #[test]
    fn uncolored_fill_writes_nothing() {
        let mut p = TermPaint::new(Vec::new(), Expanse::new(5, 5));
        p.fill(Rect::new(0, 0, 5, 5), None).unwrap();
        assert!(output(p).is_empty());
    }

    #[test]
    fn fill_is_clipped() {
        let mut p = TermPaint::new(Vec::new(), Expanse::new(4, 2));
        let pair = Color::Pair {
            fg: Pen::Black,
            bg: Pen::White,
        };
        p.fill(Rect::new(2, 1, 10, 10), Some(pair)).unwrap();
        let out = output(p);
        assert!(out.contains("  "));
        assert!(!out.contains("   "));
        p = TermPaint::new(Vec::new(), Expanse::new(4, 2));
        p.fill(Rect::new(4, 0, 1, 1), Some(pair)).unwrap();
        assert!(output(p).is_empty());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn io_errors_become_render_errors() {
        let mut p = TermPaint::new(Broken, Expanse::new(5, 5));
        assert!(matches!(
            p.text("x", 1, 0, 0, None, AttrSet::default()),
            Err(Error::Render(_))
        ));
        assert!(matches!(p.flush(), Err(Error::Render(_))));
    }
}
