//! Deck statistics command (`mazzo stats`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mazzo::DeckStats;

use crate::cli::utils::read_deck;

/// Arguments for `mazzo stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Deck file to analyze (`-` for stdin).
    pub deck: PathBuf,
}

/// Execute the stats command.
pub fn handle(args: StatsArgs) -> Result<()> {
    let deck = read_deck(args.deck.as_path())?;
    match DeckStats::analyze(&deck.cards) {
        Some(stats) => println!("{}", stats),
        None => println!("Deck is empty."),
    }
    Ok(())
}
