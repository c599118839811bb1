use derive_more::Display;
use std::ops::Not;

/// The color of a chess piece.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    pub const ALL: [Self; 2] = [Color::White, Color::Black];

    /// This color's index in the range (0..=1).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns an iterator over [`Color`]s ordered by [index][`Color::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

/// White is always the starting player.
impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
