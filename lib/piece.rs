use crate::{Color, Role};
use derive_more::Display;
use std::fmt::{self, Write};

/// A chess piece of a certain [`Color`] and [`Role`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} {}", color, role)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub fn new(color: Color, role: Role) -> Self {
        Piece { color, role }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's letter in algebraic notation, upper case for white.
    pub fn char(&self) -> char {
        use {Color::*, Role::*};
        match (self.color, self.role) {
            (White, Pawn) => 'P',
            (White, Knight) => 'N',
            (White, Bishop) => 'B',
            (White, Rook) => 'R',
            (White, Queen) => 'Q',
            (White, King) => 'K',
            (Black, Pawn) => 'p',
            (Black, Knight) => 'n',
            (Black, Bishop) => 'b',
            (Black, Rook) => 'r',
            (Black, Queen) => 'q',
            (Black, King) => 'k',
        }
    }

    fn figurine(&self) -> char {
        use {Color::*, Role::*};
        match (self.color, self.role) {
            (White, Pawn) => '♙',
            (White, Knight) => '♘',
            (White, Bishop) => '♗',
            (White, Rook) => '♖',
            (White, Queen) => '♕',
            (White, King) => '♔',
            (Black, Pawn) => '♟',
            (Black, Knight) => '♞',
            (Black, Bishop) => '♝',
            (Black, Rook) => '♜',
            (Black, Queen) => '♛',
            (Black, King) => '♚',
        }
    }
}

/// A single-character representation of this piece.
///
/// Formats as the figurine in alternate mode, otherwise as the letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Glyph(pub Piece);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = if f.alternate() {
            self.0.figurine()
        } else {
            self.0.char()
        };

        f.write_char(c)
    }
}
