use std::fmt;

use serde::{Deserialize, Serialize};

/// Representation of a card.
///
/// A wild card stays `Wild` only until it lands on a build pile; at that point it is
/// replaced by the numbered card of its position and never becomes wild again.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Numbered card between 1 and 12.
    Number(u8),
    /// Wild card. Takes the value of its build pile position when played.
    Wild,
}

pub const MIN_CARD_VALUE: u8 = 1;
pub const MAX_CARD_VALUE: u8 = 12;
pub const WILD_COUNT: usize = 18;
pub const COPIES_PER_VALUE: usize = 12;
pub const DECK_SIZE: usize = COPIES_PER_VALUE * MAX_CARD_VALUE as usize + WILD_COUNT;
pub const HAND_SIZE: usize = 5;
pub const DISCARD_PILE_COUNT: usize = 4;
pub const BUILD_PILE_COUNT: usize = 4;
pub const STOCK_SIZE: usize = 30;
pub const SHORT_STOCK_SIZE: usize = 10;

impl Card {
    /// Returns true if the card is an unplayed wild.
    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild)
    }

    /// Returns the numeric value when available.
    #[inline]
    pub fn number(&self) -> Option<u8> {
        match self {
            Card::Number(v) => Some(*v),
            Card::Wild => None,
        }
    }

    /// Checks whether the card can legally satisfy the requested value.
    #[inline]
    pub fn matches_value(&self, value: u8) -> bool {
        debug_assert!((MIN_CARD_VALUE..=MAX_CARD_VALUE).contains(&value));
        matches!(self, Card::Wild) || self.number() == Some(value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(value) => write!(f, "{value}"),
            Card::Wild => f.write_str("W"),
        }
    }
}

/// Builds a full 162-card deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _ in 0..COPIES_PER_VALUE {
        for value in MIN_CARD_VALUE..=MAX_CARD_VALUE {
            deck.push(Card::Number(value));
        }
    }
    deck.extend(std::iter::repeat(Card::Wild).take(WILD_COUNT));
    deck
}
