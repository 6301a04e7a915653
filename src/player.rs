use std::array::from_fn;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, DISCARD_PILE_COUNT};
use crate::hand::Hand;
use crate::pile::{DiscardPile, Pile};

/// The two seats at the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Cpu,
}

impl Seat {
    pub fn opponent(self) -> Self {
        match self {
            Seat::Human => Seat::Cpu,
            Seat::Cpu => Seat::Human,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => f.pad("human"),
            Seat::Cpu => f.pad("cpu"),
        }
    }
}

/// A player owns a hand, four discard piles and a stock pile.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    seat: Seat,
    pub(crate) hand: Hand,
    pub(crate) discard_piles: [DiscardPile; DISCARD_PILE_COUNT],
    pub(crate) stock: Pile,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, seat: Seat) -> Self {
        Self {
            name: name.into(),
            seat,
            hand: Hand::new(),
            discard_piles: from_fn(|_| DiscardPile::new()),
            stock: Pile::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn is_human(&self) -> bool {
        self.seat == Seat::Human
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn discard_piles(&self) -> &[DiscardPile; DISCARD_PILE_COUNT] {
        &self.discard_piles
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn stock_top(&self) -> Option<Card> {
        self.stock.top()
    }

    pub fn discard_top(&self, index: usize) -> Option<Card> {
        self.discard_piles.get(index).and_then(Pile::top)
    }

    /// Cards held anywhere by this player.
    pub fn card_count(&self) -> usize {
        self.hand.card_count()
            + self.stock.len()
            + self.discard_piles.iter().map(Pile::len).sum::<usize>()
    }
}
