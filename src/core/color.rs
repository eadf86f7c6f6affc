//! Peg colors
//!
//! The palette is a closed set of named colors. A game uses the first
//! `total_colors` of them, addressed by zero-based index.

use std::fmt;

/// A code peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    Green = 0,
    Red = 1,
    Blue = 2,
    Yellow = 3,
    Orange = 4,
    Purple = 5,
    Cyan = 6,
    Magenta = 7,
    White = 8,
    Black = 9,
}

impl Color {
    /// Every color in palette order
    pub const ALL: [Self; 10] = [
        Self::Green,
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::Cyan,
        Self::Magenta,
        Self::White,
        Self::Black,
    ];

    /// Look up a color by its palette index
    ///
    /// Returns `None` if the index is outside the named palette. Range checks
    /// against a game's `total_colors` happen in code construction.
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based palette index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Parse a color from its name (case-insensitive) or a single digit
    #[must_use]
    pub fn from_name(text: &str) -> Option<Self> {
        let lowered = text.trim().to_ascii_lowercase();
        if let Ok(index) = lowered.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::ALL.into_iter().find(|color| color.name() == lowered)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}
