use crate::{Color, Piece, Role};
use std::fmt;

/// The running count of captured pieces by color and role.
///
/// The count for a (color, role) pair only ever grows and never exceeds the
/// role's initial complement; once some role of one color is wiped out, the
/// other color has won.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ledger {
    counts: [[u8; 6]; 2],
}

impl Ledger {
    /// How many pieces of this color and role have been captured so far.
    pub fn count(&self, c: Color, r: Role) -> u8 {
        self.counts[c.index() as usize][r.index() as usize]
    }

    /// Records the capture of a piece.
    ///
    /// The count saturates at the role's initial complement, since no more
    /// pieces of a role than initially existed can ever be captured.
    pub fn record(&mut self, p: Piece) {
        let count = &mut self.counts[p.color().index() as usize][p.role().index() as usize];
        *count = u8::min(*count + 1, p.role().initial_count());
    }

    /// Whether every piece of this color and role has been captured.
    ///
    /// The queen's initial complement is one, so capturing her alone
    /// satisfies this predicate without a special case.
    pub fn is_wiped_out(&self, c: Color, r: Role) -> bool {
        self.count(c, r) >= r.initial_count()
    }

    /// The winning color, if some role of the opposing color has been
    /// entirely captured.
    ///
    /// This is the one canonical win rule; the game engine consults it
    /// after every capture and derives its terminal status from it.
    pub fn winner(&self) -> Option<Color> {
        Color::iter()
            .find(|&c| Role::iter().any(|r| self.is_wiped_out(c, r)))
            .map(|loser| !loser)
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in Color::iter() {
            write!(f, "{}:", c)?;

            for r in Role::iter() {
                write!(f, " {} {}/{}", r, self.count(c, r), r.initial_count())?;
            }

            if c == Color::White {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
