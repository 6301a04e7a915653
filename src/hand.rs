use serde::{Deserialize, Serialize};

use crate::card::{Card, HAND_SIZE};

/// Five addressable slots, each either holding a card or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: [Option<Card>; HAND_SIZE],
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Card at `index`; `None` when the slot is empty or out of range.
    pub fn card(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().flatten()
    }

    /// Places `card` in slot `index`, returning whatever was there.
    ///
    /// Panics if `index` is not below [`HAND_SIZE`].
    pub fn set_card(&mut self, index: usize, card: Card) -> Option<Card> {
        self.slots[index].replace(card)
    }

    /// Removes and returns the card at `index`, leaving the slot empty.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn slots(&self) -> &[Option<Card>; HAND_SIZE] {
        &self.slots
    }

    pub fn empty_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn card_count(&self) -> usize {
        HAND_SIZE - self.empty_count()
    }

    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }

    /// Occupied slots in ascending order.
    pub fn cards(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|card| (index, card)))
    }
}
