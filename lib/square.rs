use crate::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A square of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", file, rank)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    pub fn new(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// Returns an iterator over all [`Square`]s, rank by rank.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64u8).map(|i| Square::new(File::from_index(i % 8), Rank::from_index(i / 8)))
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "unable to parse square; {}")]
pub enum ParseSquareError {
    #[display(fmt = "invalid file")]
    InvalidFile(ParseFileError),
    #[display(fmt = "invalid rank")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);

        Ok(Square {
            file: s[..i].parse()?,
            rank: s[i..].parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_file_is_invalid(
        #[filter(!('a'..='h').contains(&#c))] c: char,
        r: Rank,
    ) {
        let s = [c.to_string(), r.to_string()].concat();
        assert_eq!(s.parse::<Square>(), Err(ParseFileError.into()));
    }

    #[proptest]
    fn parsing_square_fails_if_rank_is_invalid(f: File, #[strategy("[^1-8]*")] r: String) {
        let s = [f.to_string(), r].concat();
        assert_eq!(s.parse::<Square>(), Err(ParseRankError.into()));
    }

    #[proptest]
    fn iter_returns_all_squares_exactly_once() {
        let squares: Vec<_> = Square::iter().collect();
        assert_eq!(squares.len(), 64);

        for f in File::iter() {
            for r in Rank::iter() {
                assert_eq!(squares.iter().filter(|sq| **sq == Square::new(f, r)).count(), 1);
            }
        }
    }
}
