//! Grid rendering command (`mazzo render`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mazzo::{render_grid, GridOptions};

use crate::cli::utils::read_deck;

/// Arguments for `mazzo render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Deck file to render (`-` for stdin).
    pub deck: PathBuf,
    /// Cards per row group.
    #[arg(long = "per-row", default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    pub per_row: u16,
    /// Full box width in characters, borders included.
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u16).range(8..))]
    pub width: u16,
    /// Shuffle seed; omitted means one drawn from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute the render command.
pub fn handle(args: RenderArgs) -> Result<()> {
    let deck = read_deck(args.deck.as_path())?;
    let options = GridOptions {
        cards_per_row: usize::from(args.per_row),
        box_width: usize::from(args.width),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let grid = render_grid(&deck.cards, &options, seed);
    if !grid.is_empty() {
        println!("{}", grid);
    }
    Ok(())
}
