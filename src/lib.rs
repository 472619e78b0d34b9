//! Core library for deck file parsing, JSON export, statistics, and grid rendering.

mod analysis;
mod deck;
mod layout;
mod symbols;

pub use analysis::DeckStats;
pub use deck::{Card, Deck, Effect, ParseError};
pub use layout::{render_grid, GridOptions};
pub use symbols::{Action, CardType, PlayerTarget, Symbol, SymbolError, WhenToPlay};
