use serde::{Deserialize, Serialize};

use crate::player::Seat;

/// Move intent submitted on behalf of the player whose turn it is.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card in a hand slot onto a build pile.
    PlayHand { build_pile: usize, hand_slot: usize },
    /// Play the top stock card onto a build pile.
    PlayStock { build_pile: usize },
    /// Play the top card of a discard pile onto a build pile.
    PlayDiscard {
        build_pile: usize,
        discard_pile: usize,
    },
    /// Move a hand card onto a discard pile and end the turn.
    Discard {
        discard_pile: usize,
        hand_slot: usize,
    },
}

impl Action {
    /// Returns the build pile index if the action is a play.
    pub fn build_pile(&self) -> Option<usize> {
        match self {
            Action::PlayHand { build_pile, .. }
            | Action::PlayStock { build_pile }
            | Action::PlayDiscard { build_pile, .. } => Some(*build_pile),
            Action::Discard { .. } => None,
        }
    }

    pub fn ends_turn(&self) -> bool {
        matches!(self, Action::Discard { .. })
    }
}

/// One player's turn: who is acting and every action accepted so far.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    seat: Seat,
    actions: Vec<Action>,
}

impl Turn {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            actions: Vec::new(),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub(crate) fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }
}
