use crate::{rules, Board, Color, Ledger, Move, ParseSquareError, Piece, Square, Status};
use derive_more::{Display, Error, From};
use tracing::{info, instrument};

/// The reason why a move was rejected.
///
/// Every kind is a recoverable outcome; the game state is left untouched
/// whenever one is returned.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
#[error(ignore)]
pub enum InvalidMove {
    #[display(fmt = "the game has already been won by the {} player", _0)]
    #[from(ignore)]
    GameHasEnded(Color),

    #[display(fmt = "{}", _0)]
    InvalidSquare(ParseSquareError),

    #[display(fmt = "there is no piece on {}", _0)]
    #[from(ignore)]
    VacantSquare(Square),

    #[display(fmt = "it is not the {} player's turn", _0)]
    #[from(ignore)]
    TurnOfTheOpponent(Color),

    #[display(fmt = "the {} may not move from {} to {}", _0, "_1.whence()", "_1.whither()")]
    IllegalPieceMove(Piece, Move),
}

/// A game of the chess variant, from the initial layout to a decisive
/// capture.
///
/// The game ends as soon as every piece of some role belonging to one side
/// has been captured; the queen is a role of one, so her capture alone
/// decides the game.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    ledger: Ledger,
    turn: Color,
    status: Status,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The overall state of the game.
    ///
    /// Always agrees with [`Ledger::winner`] on the current capture ledger.
    pub fn status(&self) -> Status {
        self.status
    }

    /// A read-only snapshot of the current piece placement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The capture ledger so far.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Resolves two algebraic square labels and plays the move they denote.
    #[instrument(level = "debug", skip(self), err)]
    pub fn make_move(&mut self, from: &str, to: &str) -> Result<(), InvalidMove> {
        let whence: Square = from.parse()?;
        let whither: Square = to.parse()?;
        self.play(Move(whence, whither))
    }

    /// Plays a move if valid, otherwise returns the reason why not.
    ///
    /// Validation happens in full before any mutation, so a rejected move
    /// leaves the board, ledger, turn, and status exactly as they were.
    pub fn play(&mut self, m: Move) -> Result<(), InvalidMove> {
        use InvalidMove::*;

        if let Some(winner) = self.status.winner() {
            return Err(GameHasEnded(winner));
        }

        let piece = self.board[m.whence()].ok_or(VacantSquare(m.whence()))?;

        if piece.color() != self.turn {
            return Err(TurnOfTheOpponent(piece.color()));
        }

        if m.whither() == m.whence() || !rules::is_legal(piece, m.whence(), m.whither(), &self.board)
        {
            return Err(IllegalPieceMove(piece, m));
        }

        if let Some(captured) = self.board.clear(m.whither()) {
            self.ledger.record(captured);
            info!(%captured, square = %m.whither(), "piece captured");

            if let Some(winner) = self.ledger.winner() {
                self.status = Status::Won(winner);
                info!(%winner, "game over");
            }
        }

        self.board.clear(m.whence());
        self.board.place(m.whither(), piece);
        self.turn = !self.turn;

        Ok(())
    }
}
