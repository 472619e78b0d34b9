//! Deck records and the line-oriented deck file parser.
//!
//! A deck file is a flat sequence of records, one token per line, with no
//! boundary markers: each record spans `7 + number_of_effects` lines and the
//! effect count is only known once the record's fifth line has been read.
//! Parsing therefore runs through [`LineCursor`], a stateful reader whose
//! `read_record` operation tracks exactly how many lines it has consumed and
//! reports the failing offset when the stream is malformed or runs out.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::symbols::{Action, CardType, PlayerTarget, Symbol, SymbolError, WhenToPlay};

/// Fatal deck parsing failure. Line numbers are 1-based.
///
/// The format is positional and does not self-synchronize, so none of these
/// are recoverable: any corruption invalidates every later record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line (or effect field) that should hold an integer does not.
    #[error("line {line}: expected an integer, found '{token}'")]
    Number { line: usize, token: String },
    /// An integer code that falls outside its symbol table.
    #[error("line {line}: {source}")]
    Symbol {
        line: usize,
        #[source]
        source: SymbolError,
    },
    /// Input ended while a record still had lines to consume.
    #[error("input ends at line {line} before completing the record starting at line {record}")]
    Truncated { line: usize, record: usize },
}

/// One effect of a card. Effects resolve in the order they are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub action: Action,
    pub player_target: PlayerTarget,
    pub card_target: CardType,
}

/// One deck entry, covering `quantity` physical copies of the same card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub quantity: u32,
    pub name: String,
    pub description: String,
    pub card_type: CardType,
    pub effects: Vec<Effect>,
    pub when_to_play: WhenToPlay,
    pub optional: bool,
}

/// Stateful reader over the deck file's lines.
///
/// The cursor owns all of the index arithmetic: after `read_record` returns,
/// it sits exactly at the start of the next record, with no gap or overlap.
struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
    record_start: usize,
}

impl<'a> LineCursor<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            pos: 0,
            record_start: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Number of lines consumed so far.
    fn consumed(&self) -> usize {
        self.pos
    }

    fn next_line(&mut self) -> Result<&'a str, ParseError> {
        let line = self.lines.get(self.pos).ok_or(ParseError::Truncated {
            line: self.lines.len(),
            record: self.record_start + 1,
        })?;
        self.pos += 1;
        Ok(line)
    }

    fn next_int<T: FromStr>(&mut self) -> Result<T, ParseError> {
        let at = self.pos + 1;
        let line = self.next_line()?;
        parse_int(line, at)
    }

    fn next_symbol<S: Symbol>(&mut self) -> Result<S, ParseError> {
        let at = self.pos + 1;
        let code: i64 = self.next_int()?;
        S::from_code(code).map_err(|source| ParseError::Symbol { line: at, source })
    }

    /// Read one full card record, advancing by `7 + effect_count` lines.
    fn read_record(&mut self) -> Result<Card, ParseError> {
        self.record_start = self.pos;

        let quantity: u32 = self.next_int()?;
        let name = self.next_line()?.to_string();
        let description = self.next_line()?.to_string();
        let card_type: CardType = self.next_symbol()?;

        let effect_count: usize = self.next_int()?;
        // The declared count is untrusted input; capacity is capped and each
        // effect line is still fetched through the cursor's bounds check.
        let mut effects = Vec::with_capacity(effect_count.min(64));
        for _ in 0..effect_count {
            let at = self.pos + 1;
            let line = self.next_line()?;
            effects.push(parse_effect(line, at)?);
        }

        let when_to_play: WhenToPlay = self.next_symbol()?;
        let optional = self.next_int::<i64>()? != 0;

        Ok(Card {
            quantity,
            name,
            description,
            card_type,
            effects,
            when_to_play,
            optional,
        })
    }
}

fn parse_int<T: FromStr>(token: &str, line: usize) -> Result<T, ParseError> {
    token.trim().parse().map_err(|_| ParseError::Number {
        line,
        token: token.trim().to_string(),
    })
}

/// An effect line holds exactly three whitespace-separated integer codes:
/// action, player target, card target.
fn parse_effect(line: &str, at: usize) -> Result<Effect, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [action, player, card] = fields.as_slice() else {
        return Err(ParseError::Number {
            line: at,
            token: line.trim().to_string(),
        });
    };
    let resolve = |source| ParseError::Symbol { line: at, source };
    Ok(Effect {
        action: Action::from_code(parse_int(action, at)?).map_err(resolve)?,
        player_target: PlayerTarget::from_code(parse_int(player, at)?).map_err(resolve)?,
        card_target: CardType::from_code(parse_int(card, at)?).map_err(resolve)?,
    })
}

/// The parsed deck: an ordered, immutable sequence of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Parse a deck from pre-split lines.
    pub fn parse_lines(lines: &[&str]) -> Result<Self, ParseError> {
        let mut cursor = LineCursor::new(lines);
        let mut cards = Vec::new();
        while !cursor.at_end() {
            cards.push(cursor.read_record()?);
        }
        debug_assert_eq!(cursor.consumed(), lines.len());
        Ok(Self { cards })
    }

    /// Parse a deck from the raw text of a deck file.
    pub fn parse_text(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text.lines().collect();
        Self::parse_lines(&lines)
    }

    /// Read and parse a deck file, attaching path context to any failure.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read deck file {}", path.display()))?;
        Self::parse_text(&text)
            .with_context(|| format!("failed to parse deck file {}", path.display()))
    }

    /// Number of distinct card records.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total physical copies across all records.
    pub fn total_copies(&self) -> u64 {
        self.cards.iter().map(|card| u64::from(card.quantity)).sum()
    }

    /// Render the deck as a pretty-printed JSON array.
    ///
    /// Field order and the `"[code] NAME"` composites are pinned by the
    /// manual [`Serialize`] impls below, so repeated runs are byte-identical.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.cards)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Card", 8)?;
        state.serialize_field("quantity", &self.quantity)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("type", &self.card_type.label())?;
        state.serialize_field("number_of_effects", &self.effects.len())?;
        state.serialize_field("effects", &self.effects)?;
        state.serialize_field("when_to_play", &self.when_to_play.label())?;
        state.serialize_field("optional", &self.optional)?;
        state.end()
    }
}

impl Serialize for Effect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Effect", 3)?;
        state.serialize_field("action", &self.action.label())?;
        state.serialize_field("player_target", &self.player_target.label())?;
        state.serialize_field("card_target", &self.card_target.label())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ACE: &[&str] = &["2", "Ace", "Draw a card", "1", "1", "4 0 2", "0", "0"];

    #[test]
    fn parses_a_single_record() {
        let deck = Deck::parse_lines(ACE).unwrap();
        assert_eq!(deck.len(), 1);

        let card = &deck.cards[0];
        assert_eq!(card.quantity, 2);
        assert_eq!(card.name, "Ace");
        assert_eq!(card.description, "Draw a card");
        assert_eq!(card.card_type, CardType::Studente);
        assert_eq!(
            card.effects,
            vec![Effect {
                action: Action::Pesca,
                player_target: PlayerTarget::Io,
                card_target: CardType::Matricola,
            }]
        );
        assert_eq!(card.when_to_play, WhenToPlay::Subito);
        assert!(!card.optional);
    }

    #[test]
    fn cursor_lands_exactly_on_record_boundaries() {
        // Two records back to back: strides 7 + 1 and 7 + 0.
        let mut lines: Vec<&str> = ACE.to_vec();
        lines.extend(["1", "Bee", "Does nothing", "5", "0", "3", "1"]);
        let mut cursor = LineCursor::new(&lines);

        let first = cursor.read_record().unwrap();
        assert_eq!(cursor.consumed(), 8);
        assert_eq!(first.effects.len(), 1);

        let second = cursor.read_record().unwrap();
        assert_eq!(cursor.consumed(), lines.len());
        assert_eq!(second.effects.len(), 0);
        assert_eq!(second.when_to_play, WhenToPlay::Mai);
        assert!(second.optional);
        assert!(cursor.at_end());
    }

    #[test]
    fn declared_effect_count_matches_parsed_effects() {
        let lines = [
            "1",
            "Hydra",
            "Three-headed",
            "7",
            "3",
            "0 0 0",
            "4 1 2",
            "10 3 0",
            "4",
            "1",
        ];
        let deck = Deck::parse_lines(&lines).unwrap();
        assert_eq!(deck.cards[0].effects.len(), 3);
        assert_eq!(deck.cards[0].effects[2].action, Action::Ingegnere);
        assert_eq!(deck.cards[0].when_to_play, WhenToPlay::Sempre);
    }

    #[test]
    fn non_numeric_line_is_a_format_error() {
        let lines = ["two", "Ace", "Draw a card", "1", "0", "0", "0"];
        let err = Deck::parse_lines(&lines).unwrap_err();
        assert_eq!(
            err,
            ParseError::Number {
                line: 1,
                token: "two".to_string()
            }
        );
    }

    #[test]
    fn out_of_range_type_code_is_a_range_error() {
        let lines = ["2", "Ace", "Draw a card", "99", "0", "0", "0"];
        let err = Deck::parse_lines(&lines).unwrap_err();
        assert_eq!(
            err,
            ParseError::Symbol {
                line: 4,
                source: SymbolError {
                    table: "CardType",
                    code: 99,
                    len: 9
                }
            }
        );
    }

    #[test]
    fn oversized_effect_count_truncates_cleanly() {
        // Claims five effects but the file ends after one.
        let lines = ["2", "Ace", "Draw a card", "1", "5", "4 0 2"];
        let err = Deck::parse_lines(&lines).unwrap_err();
        assert_eq!(err, ParseError::Truncated { line: 6, record: 1 });
    }

    #[test]
    fn truncation_reports_the_failing_record() {
        let mut lines: Vec<&str> = ACE.to_vec();
        lines.extend(["1", "Bee"]);
        let err = Deck::parse_lines(&lines).unwrap_err();
        assert_eq!(err, ParseError::Truncated { line: 10, record: 9 });
    }

    #[test]
    fn effect_line_needs_exactly_three_fields() {
        let lines = ["2", "Ace", "Draw a card", "1", "1", "4 0", "0", "0"];
        let err = Deck::parse_lines(&lines).unwrap_err();
        assert_eq!(
            err,
            ParseError::Number {
                line: 6,
                token: "4 0".to_string()
            }
        );

        let lines = ["2", "Ace", "Draw a card", "1", "1", "4 0 2 9", "0", "0"];
        assert!(matches!(
            Deck::parse_lines(&lines),
            Err(ParseError::Number { line: 6, .. })
        ));
    }

    #[test]
    fn json_export_is_stable_and_field_ordered() {
        let deck = Deck::parse_lines(ACE).unwrap();
        let json = deck.to_json().unwrap();
        assert_eq!(
            json,
            r#"[
  {
    "quantity": 2,
    "name": "Ace",
    "description": "Draw a card",
    "type": "[1] STUDENTE",
    "number_of_effects": 1,
    "effects": [
      {
        "action": "[4] PESCA",
        "player_target": "[0] IO",
        "card_target": "[2] MATRICOLA"
      }
    ],
    "when_to_play": "[0] SUBITO",
    "optional": false
  }
]"#
        );
        // Re-serializing the same parsed deck is byte-identical.
        assert_eq!(json, deck.to_json().unwrap());
    }

    #[test]
    fn empty_input_is_an_empty_deck() {
        let deck = Deck::parse_text("").unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.total_copies(), 0);
    }
}
