//! Style tags carried by nodes and handed, unchanged, to the painter.

use std::ops::{BitOr, BitOrAssign};

/// A terminal color value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black.
    Black,
    /// Dark grey.
    DarkGrey,
    /// Red.
    Red,
    /// Dark red.
    DarkRed,
    /// Green.
    Green,
    /// Dark green.
    DarkGreen,
    /// Yellow.
    Yellow,
    /// Dark yellow.
    DarkYellow,
    /// Blue.
    Blue,
    /// Dark blue.
    DarkBlue,
    /// Magenta.
    Magenta,
    /// Dark magenta.
    DarkMagenta,
    /// Cyan.
    Cyan,
    /// Dark cyan.
    DarkCyan,
    /// White.
    White,
    /// Grey.
    Grey,
    /// RGB color.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
    /// An entry in the 256-color ANSI palette.
    AnsiValue(u8),
    /// A foreground/background pair, for backgrounds that need a contrasting
    /// text color (title bars and the like).
    Pair {
        /// Foreground half of the pair.
        fg: Pen,
        /// Background half of the pair.
        bg: Pen,
    },
}

/// A single-channel color used inside [`Color::Pair`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pen {
    /// The terminal's own default color.
    Default,
    /// Black.
    Black,
    /// White.
    White,
    /// An entry in the 256-color ANSI palette.
    AnsiValue(u8),
}

impl Color {
    /// The color to draw glyphs with, if this color sets one.
    pub fn foreground(self) -> Option<Self> {
        match self {
            Self::Pair { fg, .. } => fg.color(),
            c => Some(c),
        }
    }

    /// The color to fill backgrounds with, if this color sets one. Plain
    /// colors only tint text.
    pub fn background(self) -> Option<Self> {
        match self {
            Self::Pair { bg, .. } => bg.color(),
            _ => None,
        }
    }
}

impl Pen {
    /// Resolve to a plain color, `None` for the terminal default.
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Default => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
            Self::AnsiValue(v) => Some(Color::AnsiValue(v)),
        }
    }
}

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attr {
    /// Bold text.
    Bold,
    /// Crossed out text.
    CrossedOut,
    /// Dim text.
    Dim,
    /// Italic text.
    Italic,
    /// Reverse video.
    Reverse,
    /// Underlined text.
    Underline,
}

/// A set of active text attributes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct AttrSet {
    /// Bold flag.
    pub bold: bool,
    /// Crossed out flag.
    pub crossedout: bool,
    /// Dim flag.
    pub dim: bool,
    /// Italic flag.
    pub italic: bool,
    /// Reverse video flag.
    pub reverse: bool,
    /// Underline flag.
    pub underline: bool,
}

impl AttrSet {
    /// Construct a set of text attributes with a single attribute turned on.
    pub fn new(attr: Attr) -> Self {
        Self::default().with(attr)
    }

    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.dim || self.italic || self.crossedout || self.reverse || self.underline)
    }

    /// A helper for progressive construction of attribute sets.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::CrossedOut => self.crossedout = true,
            Attr::Underline => self.underline = true,
            Attr::Reverse => self.reverse = true,
        };
        self
    }

    /// Every attribute active in either set.
    pub fn union(self, other: Self) -> Self {
        Self {
            bold: self.bold || other.bold,
            crossedout: self.crossedout || other.crossedout,
            dim: self.dim || other.dim,
            italic: self.italic || other.italic,
            reverse: self.reverse || other.reverse,
            underline: self.underline || other.underline,
        }
    }
}

impl From<Attr> for AttrSet {
    fn from(attr: Attr) -> Self {
        Self::new(attr)
    }
}

impl BitOr for AttrSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for AttrSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}
