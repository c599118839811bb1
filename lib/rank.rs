use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::{ops::Sub, str::FromStr};

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    pub const ALL: [Self; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];

    /// Constructs [`Rank`] from index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=7).
    pub fn from_index(i: u8) -> Self {
        Self::ALL[i as usize]
    }

    /// This rank's index in the range (0..=7).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns an iterator over [`Rank`]s ordered by [index][`Rank::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl Sub for Rank {
    type Output = i8;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected digit in the range `('1'..='8')`")]
pub struct ParseRankError;

impl TryFrom<char> for Rank {
    type Error = ParseRankError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Ok(Rank::from_index(c as u8 - b'1')),
            _ => Err(ParseRankError),
        }
    }
}

impl From<Rank> for char {
    fn from(r: Rank) -> char {
        (b'1' + r.index()) as char
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseRankError),
        }
    }
}
