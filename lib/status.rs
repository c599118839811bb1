use crate::Color;
use derive_more::Display;

/// The overall state of the game.
///
/// The status is monotonic; once it leaves [`Status::Ongoing`] it never
/// changes again.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Status {
    #[display(fmt = "ongoing")]
    Ongoing,

    #[display(fmt = "won by the {} player", _0)]
    Won(Color),
}

impl Default for Status {
    fn default() -> Self {
        Status::Ongoing
    }
}

impl Status {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The winning side, if the game has ended.
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Status::Ongoing => None,
            Status::Won(c) => Some(c),
        }
    }
}
