use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::{ops::Sub, str::FromStr};

/// A column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum File {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
}

impl File {
    pub const ALL: [Self; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Constructs [`File`] from index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=7).
    pub fn from_index(i: u8) -> Self {
        Self::ALL[i as usize]
    }

    /// This file's index in the range (0..=7).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns an iterator over [`File`]s ordered by [index][`File::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl Sub for File {
    type Output = i8;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected lower case letter in the range `('a'..='h')`")]
pub struct ParseFileError;

impl TryFrom<char> for File {
    type Error = ParseFileError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(File::from_index(c as u8 - b'a')),
            _ => Err(ParseFileError),
        }
    }
}

impl From<File> for char {
    fn from(f: File) -> char {
        (b'a' + f.index()) as char
    }
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseFileError),
        }
    }
}
