//! Shuffled grid rendering of the deck as bordered ASCII card boxes.
//!
//! Cards are shuffled with an explicitly seeded RNG, split into row groups,
//! and drawn as fixed-width boxes. Boxes in a group share one height, sized
//! by the longest wrapped description in that group, and are composed
//! left-to-right one text row at a time.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Card;
use crate::symbols::Symbol;

/// Grid geometry. Widths count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Boxes per row group; the final group may be shorter.
    pub cards_per_row: usize,
    /// Full box width including borders.
    pub box_width: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            cards_per_row: 8,
            box_width: 32,
        }
    }
}

/// Render the whole deck as a grid of card boxes, shuffled by `seed`.
///
/// The same seed always yields the same permutation. Footer indices are
/// 1-based positions in the shuffled order over the full deck size.
pub fn render_grid(cards: &[Card], options: &GridOptions, seed: u64) -> String {
    let order = shuffle_order(cards, seed);
    let per_row = options.cards_per_row.max(1);
    let width = options.box_width;
    let interior = width.saturating_sub(4).max(1);
    let total = order.len();

    let top = format!("┌{}┐", "─".repeat(width.saturating_sub(2)));
    let bottom = format!("└{}┘", "─".repeat(width.saturating_sub(2)));
    let separator = boxed(&" ".repeat(interior));

    let mut lines: Vec<String> = Vec::new();
    for (group_idx, group) in order.chunks(per_row).enumerate() {
        let wrapped: Vec<Vec<String>> = group
            .iter()
            .map(|card| wrap_text(&card.description, interior))
            .collect();
        let max_desc = wrapped.iter().map(Vec::len).max().unwrap_or(0);
        let mut buffer = vec![String::new(); 7 + max_desc];

        for (offset, (card, desc)) in group.iter().zip(&wrapped).enumerate() {
            let index = group_idx * per_row + offset + 1;

            buffer[0].push_str(&top);
            buffer[1].push_str(&boxed(&center(&card.name, interior)));

            let type_label = format!("[{}]", card.card_type.name().replace('_', " "));
            buffer[2].push_str(&boxed(&center(&type_label, interior)));
            buffer[3].push_str(&separator);

            for (row, line) in desc.iter().enumerate() {
                buffer[4 + row].push_str(&boxed(&pad_right(line, interior)));
            }
            // Blank interior rows through 4 + max_desc keep group heights uniform.
            for row in 4 + desc.len()..=4 + max_desc {
                buffer[row].push_str(&separator);
            }

            let footer = format!("{}/{}", index, total);
            buffer[5 + max_desc].push_str(&boxed(&center(&footer, interior)));
            buffer[6 + max_desc].push_str(&bottom);
        }

        lines.extend(buffer);
    }
    lines.join("\n")
}

/// Uniformly random permutation of the deck, deterministic per seed.
fn shuffle_order(cards: &[Card], seed: u64) -> Vec<&Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<&Card> = cards.iter().collect();
    order.shuffle(&mut rng);
    order
}

fn boxed(interior: &str) -> String {
    format!("│ {} │", interior)
}

/// Center `text` in `width` columns; odd leftover space goes to the right.
fn center(text: &str, width: usize) -> String {
    let space = width.saturating_sub(text.chars().count());
    let left = space / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(space - left))
}

fn pad_right(text: &str, width: usize) -> String {
    let space = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(space))
}

/// Greedy word wrap to `width` characters. Words longer than a full line are
/// broken; an empty text wraps to zero lines.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while !word.is_empty() {
            let sep = usize::from(current_len > 0);
            if current_len + sep + word.len() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.extend(word.iter());
                current_len += sep + word.len();
                word.clear();
            } else if word.len() > width {
                // Break an oversized word on a fresh line, width chars at a time.
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let head: String = word[..width].iter().collect();
                lines.push(head);
                word.drain(..width);
            } else {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use pretty_assertions::assert_eq;

    fn deck_of(count: usize) -> Deck {
        let mut lines: Vec<String> = Vec::new();
        for i in 0..count {
            lines.push("1".to_string());
            lines.push(format!("Card {}", i));
            lines.push(format!("Description for card number {}", i));
            lines.push("1".to_string());
            lines.push("0".to_string());
            lines.push("0".to_string());
            lines.push("0".to_string());
        }
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        Deck::parse_lines(&refs).unwrap()
    }

    #[test]
    fn centering_puts_the_odd_space_on_the_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("ab", 4), " ab ");
        assert_eq!(center("abcdef", 4), "abcdef");
    }

    #[test]
    fn wrapping_is_greedy_and_breaks_long_words() {
        assert_eq!(wrap_text("Draw a card", 28), vec!["Draw a card"]);
        assert_eq!(wrap_text("Draw a card", 6), vec!["Draw a", "card"]);
        assert_eq!(wrap_text("", 28), Vec::<String>::new());
        assert_eq!(
            wrap_text("abcdefghij klm", 4),
            vec!["abcd", "efgh", "ij", "klm"]
        );
    }

    #[test]
    fn ten_cards_form_two_row_groups() {
        let deck = deck_of(10);
        let grid = render_grid(&deck.cards, &GridOptions::default(), 7);
        let top_rows: Vec<&str> = grid.lines().filter(|l| l.contains('┌')).collect();
        assert_eq!(top_rows.len(), 2);
        assert_eq!(top_rows[0].matches('┌').count(), 8);
        assert_eq!(top_rows[1].matches('┌').count(), 2);
    }

    #[test]
    fn box_widths_are_uniform_within_a_row() {
        let deck = deck_of(10);
        let options = GridOptions::default();
        let grid = render_grid(&deck.cards, &options, 7);
        for line in grid.lines() {
            let cols = line.chars().count();
            assert_eq!(cols % options.box_width, 0, "ragged line: {:?}", line);
            assert!(cols == 8 * options.box_width || cols == 2 * options.box_width);
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let deck = deck_of(12);
        let options = GridOptions::default();
        assert_eq!(
            render_grid(&deck.cards, &options, 42),
            render_grid(&deck.cards, &options, 42)
        );

        let a: Vec<String> = shuffle_order(&deck.cards, 1)
            .iter()
            .map(|c| c.name.clone())
            .collect();
        let b: Vec<String> = shuffle_order(&deck.cards, 1)
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let deck = deck_of(9);
        let mut names: Vec<String> = shuffle_order(&deck.cards, 99)
            .iter()
            .map(|c| c.name.clone())
            .collect();
        names.sort();
        let mut expected: Vec<String> = deck.cards.iter().map(|c| c.name.clone()).collect();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn footer_counts_against_the_full_deck() {
        let deck = deck_of(1);
        let grid = render_grid(&deck.cards, &GridOptions::default(), 0);
        assert!(grid.contains("1/1"));

        let deck = deck_of(10);
        let grid = render_grid(&deck.cards, &GridOptions::default(), 0);
        for i in 1..=10 {
            assert!(grid.contains(&format!("{}/10", i)));
        }
    }

    #[test]
    fn box_height_is_seven_plus_wrapped_description_rows() {
        let deck = deck_of(1);
        let options = GridOptions::default();
        let grid = render_grid(&deck.cards, &options, 3);
        let desc_rows = wrap_text(&deck.cards[0].description, options.box_width - 4).len();
        assert_eq!(grid.lines().count(), 7 + desc_rows);
    }

    #[test]
    fn empty_deck_renders_nothing() {
        assert_eq!(render_grid(&[], &GridOptions::default(), 0), "");
    }
}
