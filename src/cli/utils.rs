//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use mazzo::Deck;

/// Load and parse a deck file; `-` reads the deck from stdin.
pub fn read_deck(path: &Path) -> Result<Deck> {
    if path.as_os_str() == "-" {
        let text = read_stdin()?;
        return Deck::parse_text(&text).context("failed to parse deck from stdin");
    }
    Deck::load(path)
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Persist a string either to a file or stdout when `-` is provided.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(content.as_bytes())?;
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
