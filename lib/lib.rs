mod board;
mod color;
mod file;
mod game;
mod ledger;
mod moves;
mod piece;
mod rank;
mod role;
mod rules;
mod square;
mod status;

pub use crate::board::*;
pub use crate::color::*;
pub use crate::file::*;
pub use crate::game::*;
pub use crate::ledger::*;
pub use crate::moves::*;
pub use crate::piece::*;
pub use crate::rank::*;
pub use crate::role::*;
pub use crate::square::*;
pub use crate::status::*;
