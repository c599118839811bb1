use anyhow::Error as Anyhow;
use clap::Parser;

mod cli;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
