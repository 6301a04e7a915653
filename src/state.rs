use serde::{Deserialize, Serialize};

use crate::card::{
    BUILD_PILE_COUNT, Card, DISCARD_PILE_COUNT, HAND_SIZE, MIN_CARD_VALUE, SHORT_STOCK_SIZE,
    STOCK_SIZE,
};
use crate::player::Seat;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub short_game: bool,
    pub stock_size: usize,
    pub hand_size: usize,
    pub discard_piles: usize,
    pub build_piles: usize,
}

impl GameSettings {
    pub fn new(short_game: bool) -> Self {
        Self {
            short_game,
            stock_size: if short_game { SHORT_STOCK_SIZE } else { STOCK_SIZE },
            hand_size: HAND_SIZE,
            discard_piles: DISCARD_PILE_COUNT,
            build_piles: BUILD_PILE_COUNT,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Turn state machine. `Ended` is terminal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnState {
    HumanTurn,
    CpuTurn,
    Ended,
}

impl TurnState {
    pub fn for_seat(seat: Seat) -> Self {
        match seat {
            Seat::Human => TurnState::HumanTurn,
            Seat::Cpu => TurnState::CpuTurn,
        }
    }

    pub fn seat(self) -> Option<Seat> {
        match self {
            TurnState::HumanTurn => Some(Seat::Human),
            TurnState::CpuTurn => Some(Seat::Cpu),
            TurnState::Ended => None,
        }
    }
}

/// Public information regarding a build pile.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildPileView {
    pub cards: Vec<Card>,
    pub next_value: u8,
}

impl BuildPileView {
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            next_value: MIN_CARD_VALUE,
        }
    }

    /// Whether `card` would be accepted on this pile.
    pub fn accepts(&self, card: Card) -> bool {
        card.matches_value(self.next_value)
    }
}

/// Public portion of a player's state that the opponent may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub seat: Seat,
    pub name: String,
    pub stock_count: usize,
    pub stock_top: Option<Card>,
    pub discard_piles: [Vec<Card>; DISCARD_PILE_COUNT],
    pub hand_size: usize,
    pub is_current: bool,
    pub has_won: bool,
}

impl PlayerPublicState {
    pub fn discard_top(&self, index: usize) -> Option<Card> {
        self.discard_piles
            .get(index)
            .and_then(|pile| pile.last())
            .copied()
    }
}

/// Game state snapshot from one seat's point of view, consumed by bots and renderers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub turn_state: TurnState,
    pub is_active: bool,
    pub winner: Option<Seat>,
    pub self_seat: Seat,
    pub draw_pile_count: usize,
    pub recycle_pile_count: usize,
    pub build_piles: [BuildPileView; BUILD_PILE_COUNT],
    pub players: Vec<PlayerPublicState>,
    pub hand: [Option<Card>; HAND_SIZE],
}

impl GameStateView {
    /// Public state of the perspective seat.
    pub fn self_player(&self) -> Option<&PlayerPublicState> {
        self.players.iter().find(|player| player.seat == self.self_seat)
    }

    pub fn current_seat(&self) -> Option<Seat> {
        self.turn_state.seat()
    }
}
