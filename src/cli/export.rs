//! JSON export command (`mazzo export`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::utils::{read_deck, write_output};

/// Arguments for `mazzo export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Deck file to export (`-` for stdin).
    pub deck: PathBuf,
    /// Output file (`-` or omitted for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Execute the export command.
pub fn handle(args: ExportArgs) -> Result<()> {
    let deck = read_deck(args.deck.as_path())?;
    let json = deck.to_json().context("failed to serialize deck")?;
    match args.output {
        Some(path) if path.as_os_str() != "-" => {
            write_output(&path, &json)?;
            println!(
                "Exported {} card record(s) to {}",
                deck.len(),
                path.display()
            );
        }
        _ => println!("{}", json),
    }
    Ok(())
}
