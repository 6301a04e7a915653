use rand::Rng;
use rand::seq::IteratorRandom;

use crate::action::Action;
use crate::bot::Bot;
use crate::card::{Card, DISCARD_PILE_COUNT};
use crate::state::{GameStateView, PlayerPublicState};

/// The computer opponent.
///
/// Priority order, each scan in ascending index order:
/// 1. play the stock card to the first build pile that takes it;
/// 2. play the first playable hand card;
/// 3. play the first playable discard pile top;
/// 4. discard. With an empty discard pile available, the highest numbered hand card goes there.
///    Otherwise the hand card is placed on the discard pile whose top exceeds it by the
///    smallest margin, or at random when no top exceeds any hand card.
///
/// Only the last fallback consults the random source.
pub struct CpuBot<R: Rng> {
    rng: R,
}

impl<R: Rng> CpuBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_action(&mut self, state: &GameStateView) -> Option<Action> {
        cpu_next_action(state, &mut self.rng)
    }
}

impl<R: Rng> Bot for CpuBot<R> {
    fn select_action(&mut self, state: &GameStateView, _legal_actions: &[Action]) -> Option<Action> {
        self.next_action(state)
    }
}

/// Picks the next action for the seat `state` was built for.
///
/// Returns `None` only when nothing can be played and the hand is empty.
pub fn cpu_next_action<G: Rng + ?Sized>(state: &GameStateView, rng: &mut G) -> Option<Action> {
    let me = state.self_player()?;

    if let Some(build_pile) = me.stock_top.and_then(|card| target_pile(state, card)) {
        return Some(Action::PlayStock { build_pile });
    }

    for (hand_slot, card) in hand_cards(state) {
        if let Some(build_pile) = target_pile(state, card) {
            return Some(Action::PlayHand {
                build_pile,
                hand_slot,
            });
        }
    }

    for discard_pile in 0..DISCARD_PILE_COUNT {
        if let Some(build_pile) = me
            .discard_top(discard_pile)
            .and_then(|card| target_pile(state, card))
        {
            return Some(Action::PlayDiscard {
                build_pile,
                discard_pile,
            });
        }
    }

    choose_discard(state, me, rng)
}

fn choose_discard<G: Rng + ?Sized>(
    state: &GameStateView,
    me: &PlayerPublicState,
    rng: &mut G,
) -> Option<Action> {
    if let Some(discard_pile) = me.discard_piles.iter().position(Vec::is_empty) {
        let hand_slot = highest_numbered_slot(state)?;
        return Some(Action::Discard {
            discard_pile,
            hand_slot,
        });
    }

    if let Some((hand_slot, discard_pile)) = closest_fit(state, me) {
        return Some(Action::Discard {
            discard_pile,
            hand_slot,
        });
    }

    let (hand_slot, _) = hand_cards(state).choose(rng)?;
    Some(Action::Discard {
        discard_pile: rng.gen_range(0..DISCARD_PILE_COUNT),
        hand_slot,
    })
}

/// Slot of the highest numbered (non-wild) card; the lowest slot wins ties.
fn highest_numbered_slot(state: &GameStateView) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (slot, card) in hand_cards(state) {
        let Some(value) = card.number() else {
            continue;
        };
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((slot, value));
        }
    }
    best.map(|(slot, _)| slot)
}

/// (hand slot, discard pile) where the pile top exceeds the hand card by the least.
fn closest_fit(state: &GameStateView, me: &PlayerPublicState) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, i32)> = None;
    for (slot, card) in hand_cards(state) {
        let Some(value) = card.number() else {
            continue;
        };
        for pile in 0..DISCARD_PILE_COUNT {
            let Some(top) = me.discard_top(pile) else {
                continue;
            };
            let diff = match top {
                Card::Number(top) => i32::from(top) - i32::from(value),
                Card::Wild => i32::MAX,
            };
            if diff > 0 && best.is_none_or(|(_, _, smallest)| diff < smallest) {
                best = Some((slot, pile, diff));
            }
        }
    }
    best.map(|(slot, pile, _)| (slot, pile))
}

/// Lowest indexed build pile that accepts `card`.
fn target_pile(state: &GameStateView, card: Card) -> Option<usize> {
    state.build_piles.iter().position(|pile| pile.accepts(card))
}

fn hand_cards(state: &GameStateView) -> impl Iterator<Item = (usize, Card)> + '_ {
    state
        .hand
        .iter()
        .enumerate()
        .filter_map(|(slot, card)| card.map(|card| (slot, card)))
}
