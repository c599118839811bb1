use derive_more::Display;

/// The type of a chess piece.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Role {
    #[display(fmt = "pawn")]
    Pawn,
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "bishop")]
    Bishop,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "queen")]
    Queen,
    #[display(fmt = "king")]
    King,
}

impl Role {
    pub const ALL: [Self; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// This role's index in the range (0..=5).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns an iterator over [`Role`]s ordered by [index][`Role::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// How many pieces of this role each side starts the game with.
    pub fn initial_count(&self) -> u8 {
        match self {
            Role::Pawn => 8,
            Role::Knight => 2,
            Role::Bishop => 2,
            Role::Rook => 2,
            Role::Queen => 1,
            Role::King => 1,
        }
    }
}
