use crate::{Color, File, Glyph, Piece, Rank, Role, Square};
use std::{fmt, ops::Index};

/// The piece placement on the board.
///
/// The cell a piece occupies is the only record of its position, so a piece
/// can never disagree with the board about where it stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    /// The standard initial layout, white pieces on ranks 1 and 2.
    fn default() -> Self {
        use Role::*;

        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut squares = [[None; 8]; 8];

        for (i, &role) in back.iter().enumerate() {
            squares[0][i] = Some(Piece::new(Color::White, role));
            squares[7][i] = Some(Piece::new(Color::Black, role));
        }

        for i in 0..8 {
            squares[1][i] = Some(Piece::new(Color::White, Pawn));
            squares[6][i] = Some(Piece::new(Color::Black, Pawn));
        }

        Board { squares }
    }
}

impl Board {
    /// An empty board.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The [`Piece`] on the given [`Square`], if any.
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank.index() as usize][sq.file.index() as usize]
    }

    /// Places a piece on a square, replacing any previous occupant.
    pub fn place(&mut self, sq: Square, p: Piece) {
        self.squares[sq.rank.index() as usize][sq.file.index() as usize] = Some(p);
    }

    /// Removes and returns the piece on a square, if any.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank.index() as usize][sq.file.index() as usize].take()
    }

    /// Whether every square strictly between `from` and `to` is empty.
    ///
    /// The line is walked exclusive of both endpoints, so adjacent squares
    /// are trivially clear. Square pairs on no straight or diagonal line
    /// have no intermediate squares at all and are likewise trivially clear.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let df = to.file - from.file;
        let dr = to.rank - from.rank;

        if df != 0 && dr != 0 && df.abs() != dr.abs() {
            return true;
        }

        (1..i8::max(df.abs(), dr.abs())).all(|i| {
            let sq = Square::new(
                File::from_index((from.file.index() as i8 + i * df.signum()) as u8),
                Rank::from_index((from.rank.index() as i8 + i * dr.signum()) as u8),
            );

            self.piece_on(sq).is_none()
        })
    }

    /// An iterator over all pieces on the board and their squares.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| self.piece_on(sq).map(|p| (sq, p)))
    }
}

/// Retrieves the [`Piece`] on a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.rank.index() as usize][sq.file.index() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {} ", file)?;
        }

        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;

        for rank in Rank::iter().rev() {
            write!(f, " {} |", rank)?;

            for file in File::iter() {
                match self.piece_on(Square::new(file, rank)) {
                    Some(p) => write!(f, " {:#} |", Glyph(p))?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {} ", file)?;
        }

        Ok(())
    }
}
