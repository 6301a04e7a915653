//! Card piles and the push rules that distinguish them.
//!
//! Every pile is the same LIFO stack; what a pile accepts is decided by its [`PushRule`].
//! Build piles use [`Ascending`], which only admits the next card of the 1..=12 sequence and
//! pins a wild card to its position. Discard, stock and draw piles use [`AnyCard`].

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, MAX_CARD_VALUE, MIN_CARD_VALUE};
use crate::error::GameError;

/// Hooks run around every push onto a [`Pile`].
pub trait PushRule {
    /// Rejects `card` before anything is mutated.
    fn will_push(&self, cards: &[Card], card: &Card) -> Result<(), GameError>;

    /// Runs after the card is on top of `cards`.
    fn did_push(&self, _cards: &mut [Card]) {}
}

/// Accepts any card unconditionally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnyCard;

impl PushRule for AnyCard {
    fn will_push(&self, _cards: &[Card], _card: &Card) -> Result<(), GameError> {
        Ok(())
    }
}

/// Ascending 1..=12 sequence with wild resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascending;

impl Ascending {
    /// Value the next card must satisfy on a pile holding `cards`.
    pub fn next_value(cards: &[Card]) -> u8 {
        match cards.last().and_then(Card::number) {
            Some(top) => top + 1,
            None => MIN_CARD_VALUE,
        }
    }
}

impl PushRule for Ascending {
    fn will_push(&self, cards: &[Card], card: &Card) -> Result<(), GameError> {
        let required = Self::next_value(cards);
        if card.is_wild() || card.number() == Some(required) {
            return Ok(());
        }
        Err(GameError::InvalidBuildMove {
            card: *card,
            required,
        })
    }

    fn did_push(&self, cards: &mut [Card]) {
        let position = cards.len() as u8;
        if let Some(top) = cards.last_mut() {
            if top.is_wild() {
                *top = Card::Number(position);
            }
        }
    }
}

/// LIFO stack of cards; the top is the most recently pushed card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile<R = AnyCard> {
    cards: Vec<Card>,
    rule: R,
}

/// Shared pile built upward from 1 to 12.
pub type BuildPile = Pile<Ascending>;

/// Private pile that accepts any hand card.
pub type DiscardPile = Pile<AnyCard>;

impl<R: PushRule + Default> Pile<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing cards (bottom first) without running the push rule.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            rule: R::default(),
        }
    }
}

impl<R: PushRule> Pile<R> {
    /// Validates, pushes, then resolves the card. A rejected card leaves the pile untouched.
    pub fn push_card(&mut self, card: Card) -> Result<(), GameError> {
        self.rule.will_push(&self.cards, &card)?;
        self.cards.push(card);
        self.rule.did_push(&mut self.cards);
        Ok(())
    }

    /// Checks whether `card` would be accepted without pushing it.
    pub fn accepts(&self, card: &Card) -> bool {
        self.rule.will_push(&self.cards, card).is_ok()
    }

    pub fn pop_top_card(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyPile)
    }

    pub fn peek_top(&self) -> Result<Card, GameError> {
        self.top().ok_or(GameError::EmptyPile)
    }

    /// Top card, if any.
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Empties the pile, returning its cards bottom first.
    pub fn take_cards(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        self.cards.shuffle(rng);
    }
}

impl Pile<Ascending> {
    /// Value the next card must satisfy.
    pub fn next_value(&self) -> u8 {
        Ascending::next_value(&self.cards)
    }

    /// True once the top card reached 12.
    pub fn is_complete(&self) -> bool {
        self.top().and_then(|card| card.number()) == Some(MAX_CARD_VALUE)
    }
}
