//! Utilities for matching canvas contents in tests.
use super::canvas::Canvas;
use crate::style::Color;

/// A helper macro to create buffers for the canvas match assertions.
#[macro_export]
macro_rules! buf {
    ($($line:literal)*) => {
        &[$($line),*]
    };
}

/// A struct for configuring canvas matching behavior. Trailing whitespace on
/// each line is ignored.
pub struct BufTest<'a> {
    /// Reference to the canvas under test.
    canvas: &'a Canvas,
    /// Optional wildcard character.
    any_char: Option<char>,
}

impl<'a> BufTest<'a> {
    /// Create a new BufTest over a canvas.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            any_char: None,
        }
    }

    /// Set a character that matches any character on the canvas.
    pub fn with_any(mut self, any_char: char) -> Self {
        self.any_char = Some(any_char);
        self
    }

    /// Returns true if the canvas content matches the expected lines.
    pub fn matches(&self, expected: &[&str]) -> bool {
        let actual = self.canvas.lines();
        if expected.len() != actual.len() {
            return false;
        }
        expected.iter().zip(&actual).all(|(e, a)| {
            let e = e.trim_end();
            let a = a.trim_end();
            e.chars().count() == a.chars().count()
                && e.chars()
                    .zip(a.chars())
                    .all(|(ec, ac)| Some(ec) == self.any_char || ec == ac)
        })
    }

    /// Assert that the canvas matches the expected lines, printing both on
    /// failure.
    pub fn assert_matches(&self, expected: &[&str]) {
        if self.matches(expected) {
            return;
        }
        let actual = self.canvas.lines();
        let width = self.canvas.size().w as usize;

        println!("\nExpected:");
        println!("┌{}┐", "─".repeat(width));
        for line in expected {
            println!("│{line:width$}│");
        }
        println!("└{}┘", "─".repeat(width));

        println!("\nActual:");
        println!("┌{}┐", "─".repeat(width));
        for line in &actual {
            println!("│{line:width$}│");
        }
        println!("└{}┘", "─".repeat(width));

        panic!("Canvas contents did not match expected pattern");
    }

    /// Does the canvas contain the supplied substring?
    pub fn contains_text(&self, txt: &str) -> bool {
        self.canvas.lines().iter().any(|l| l.contains(txt))
    }

    /// Does the canvas contain the supplied substring with every character
    /// painted in the given color?
    pub fn contains_text_color(&self, txt: &str, color: Color) -> bool {
        let len = txt.chars().count() as u32;
        let size = self.canvas.size();
        if len == 0 || len > size.w {
            return false;
        }
        (0..size.h).any(|row| {
            (0..=size.w - len).any(|col| {
                txt.chars().enumerate().all(|(i, ch)| {
                    self.canvas
                        .get(col + i as u32, row)
                        .is_some_and(|c| c.ch == ch && c.color == Some(color))
                })
            })
        })
    }
}
