use anyhow::Error as Anyhow;
use clap::Parser;
use lib::{Game, Move};
use std::{cmp::min, io::stderr};
use tracing::{info, instrument, warn, Level};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Command line interface.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Moves to play in pure coordinate notation, e.g. `g1f3`.
    ///
    /// Defaults to a scripted opening that demonstrates captures.
    moves: Vec<Move>,
}

/// A knight-heavy opening that trades minor pieces and pawns.
const SCRIPTED_OPENING: &[(&str, &str)] = &[
    ("g1", "f3"),
    ("b8", "c6"),
    ("d2", "d4"),
    ("g8", "f6"),
    ("c2", "c4"),
    ("d7", "d5"),
    ("b1", "c3"),
    ("e7", "e6"),
    ("f3", "e5"),
    ("f8", "e7"),
    ("c3", "d5"),
    ("a7", "a5"),
    ("e5", "c6"),
    ("h7", "h5"),
    ("d5", "f6"),
];

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer().pretty().with_writer(stderr);

        registry().with(filter).with(writer).init();

        let mut game = Game::new();
        println!("{}\n", game.board());

        if self.moves.is_empty() {
            for &(from, to) in SCRIPTED_OPENING {
                match game.make_move(from, to) {
                    Ok(()) => info!(%from, %to, "move played"),
                    Err(e) => warn!(%from, %to, %e, "move rejected"),
                }
            }
        } else {
            for m in self.moves {
                match game.play(m) {
                    Ok(()) => info!(%m, "move played"),
                    Err(e) => warn!(%m, %e, "move rejected"),
                }
            }
        }

        println!("{}\n", game.board());
        println!("captures so far:\n{}\n", game.ledger());

        if game.status().is_over() {
            println!("game is {}", game.status());
        } else {
            println!("game is {}, {} to move", game.status(), game.turn());
        }

        Ok(())
    }
}
