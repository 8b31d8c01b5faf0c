use geom::Rect;

use crate::{
    error::Result,
    style::{AttrSet, Color},
};

/// The trait implemented by painters. A draw pass calls these with final
/// cell coordinates; the implementor carries whatever context it needs.
pub trait Paint {
    /// Draw one line of text starting at (`col`, `row`), writing at most
    /// `max_len` cells.
    fn text(
        &mut self,
        text: &str,
        max_len: u32,
        col: u32,
        row: u32,
        color: Option<Color>,
        attrs: AttrSet,
    ) -> Result<()>;

    /// Paint the background of a rectangle.
    fn fill(&mut self, rect: Rect, color: Option<Color>) -> Result<()>;
}

/// A painter built from a pair of closures. See [`paint_fn`].
pub struct PaintFn<T, F> {
    /// Text callback.
    text: T,
    /// Fill callback.
    fill: F,
}

/// Build a painter from a text callback and a fill callback.
pub fn paint_fn<T, F>(text: T, fill: F) -> PaintFn<T, F>
where
    T: FnMut(&str, u32, u32, u32, Option<Color>, AttrSet) -> Result<()>,
    F: FnMut(Rect, Option<Color>) -> Result<()>,
{
    PaintFn { text, fill }
}

impl<T, F> Paint for PaintFn<T, F>
where
    T: FnMut(&str, u32, u32, u32, Option<Color>, AttrSet) -> Result<()>,
    F: FnMut(Rect, Option<Color>) -> Result<()>,
{
    fn text(
        &mut self,
        text: &str,
        max_len: u32,
        col: u32,
        row: u32,
        color: Option<Color>,
        attrs: AttrSet,
    ) -> Result<()> {
        (self.text)(text, max_len, col, row, color, attrs)
    }

    fn fill(&mut self, rect: Rect, color: Option<Color>) -> Result<()> {
        (self.fill)(rect, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn closures_receive_calls() {
        let mut texts = Vec::new();
        let mut fills = Vec::new();
        {
            let mut p = paint_fn(
                |t: &str, max, col, row, _, _| {
                    texts.push((t.to_string(), max, col, row));
                    Ok(())
                },
                |r, c| {
                    fills.push((r, c));
                    Ok(())
                },
            );
            p.text("hi", 4, 1, 2, None, AttrSet::default()).unwrap();
            p.fill(Rect::new(0, 0, 3, 3), Some(Color::Red)).unwrap();
        }
        assert_eq!(texts, vec![("hi".to_string(), 4, 1, 2)]);
        assert_eq!(fills, vec![(Rect::new(0, 0, 3, 3), Some(Color::Red))]);
    }

    #[test]
    fn errors_pass_through() {
        let mut p = paint_fn(
            |_: &str, _, _, _, _, _| Err(Error::Render("boom".into())),
            |_, _| Ok(()),
        );
        assert_eq!(
            p.text("x", 1, 0, 0, None, AttrSet::default()),
            Err(Error::Render("boom".into()))
        );
    }
}
