//! Descriptive statistics over a parsed deck.

use std::fmt;

use crate::deck::Card;

/// Extremal values across a deck, measured in characters (or effect count).
///
/// Ties go to the first card in deck order, so repeated runs over the same
/// parse report the same card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckStats {
    pub max_name: String,
    pub min_name: String,
    pub max_description: String,
    pub min_description: String,
    pub max_effects: usize,
}

impl DeckStats {
    /// Compute the statistics, or `None` for an empty deck.
    pub fn analyze(cards: &[Card]) -> Option<Self> {
        let first = cards.first()?;
        let mut stats = Self {
            max_name: first.name.clone(),
            min_name: first.name.clone(),
            max_description: first.description.clone(),
            min_description: first.description.clone(),
            max_effects: first.effects.len(),
        };
        for card in &cards[1..] {
            if char_len(&card.name) > char_len(&stats.max_name) {
                stats.max_name = card.name.clone();
            }
            if char_len(&card.name) < char_len(&stats.min_name) {
                stats.min_name = card.name.clone();
            }
            if char_len(&card.description) > char_len(&stats.max_description) {
                stats.max_description = card.description.clone();
            }
            if char_len(&card.description) < char_len(&stats.min_description) {
                stats.min_description = card.description.clone();
            }
            if card.effects.len() > stats.max_effects {
                stats.max_effects = card.effects.len();
            }
        }
        Some(stats)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

impl fmt::Display for DeckStats {
    /// The five-line console report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Max name: \"{}\" ({} characters)",
            self.max_name,
            char_len(&self.max_name)
        )?;
        writeln!(
            f,
            "Min name: \"{}\" ({} characters)",
            self.min_name,
            char_len(&self.min_name)
        )?;
        writeln!(
            f,
            "Max description: \"{}\" ({} characters)",
            self.max_description,
            char_len(&self.max_description)
        )?;
        writeln!(
            f,
            "Min description: \"{}\" ({} characters)",
            self.min_description,
            char_len(&self.min_description)
        )?;
        write!(f, "Max effects: {}", self.max_effects)
    }
}
