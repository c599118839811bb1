use crate::{ParseSquareError, Square};
use derive_more::{Display, Error};
use std::str::FromStr;

/// A chess move in pure coordinate notation.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", _0, _1)]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move; {}")]
pub enum ParseMoveError {
    #[display(fmt = "invalid 'from' square")]
    InvalidFromSquare(ParseSquareError),

    #[display(fmt = "invalid 'to' square")]
    InvalidToSquare(ParseSquareError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseMoveError::*;

        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);

        Ok(Move(
            s[..i].parse().map_err(InvalidFromSquare)?,
            s[i..].parse().map_err(InvalidToSquare)?,
        ))
    }
}
