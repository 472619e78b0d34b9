//! Deck summary command (`mazzo info`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::utils::read_deck;

/// Arguments for `mazzo info`.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Deck file to inspect (`-` for stdin).
    pub deck: PathBuf,
}

/// Execute the info command.
pub fn handle(args: InfoArgs) -> Result<()> {
    let deck = read_deck(args.deck.as_path())?;
    println!("Records: {}", deck.len());
    println!("Physical copies: {}", deck.total_copies());
    Ok(())
}
