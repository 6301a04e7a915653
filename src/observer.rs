//! Notifications emitted by the engine.
//!
//! The engine calls a [`GameObserver`] synchronously at each state change. Every method has an
//! empty default so an observer only implements the events it cares about.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::action::{Action, Turn};
use crate::card::Card;
use crate::player::Seat;

pub trait GameObserver {
    fn game_started(&mut self) {}

    /// Called once the new turn's hand has been dealt. The returned delay is a pacing hint for
    /// the caller; the engine never waits on it.
    fn turn_started(&mut self, _turn: &Turn) -> Option<Duration> {
        None
    }

    fn turn_ended(&mut self, _turn: &Turn) {}

    /// `cards[i]` went into hand slot `slots[i]` of `seat`.
    fn cards_dealt(&mut self, _seat: Seat, _cards: &[Card], _slots: &[usize]) {}

    fn hand_card_played(&mut self, _seat: Seat, _action: &Action) {}

    fn stock_card_played(&mut self, _seat: Seat, _action: &Action) {}

    fn discard_card_played(&mut self, _seat: Seat, _action: &Action) {}

    fn hand_card_discarded(&mut self, _seat: Seat, _action: &Action) {}

    fn build_pile_cleared(&mut self, _build_pile: usize) {}

    fn draw_pile_recreated(&mut self) {}

    fn game_ended(&mut self, _winner: Seat) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Forwards every event to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn game_started(&mut self) {
        log::info!("game started");
    }

    fn turn_started(&mut self, turn: &Turn) -> Option<Duration> {
        log::info!("{} turn started", turn.seat());
        None
    }

    fn turn_ended(&mut self, turn: &Turn) {
        log::info!("{} turn ended after {} actions", turn.seat(), turn.actions().len());
    }

    fn cards_dealt(&mut self, seat: Seat, cards: &[Card], slots: &[usize]) {
        log::info!("dealt {} cards to {seat} into slots {slots:?}", cards.len());
    }

    fn hand_card_played(&mut self, seat: Seat, action: &Action) {
        log::info!("{seat} played from hand: {action:?}");
    }

    fn stock_card_played(&mut self, seat: Seat, action: &Action) {
        log::info!("{seat} played from stock: {action:?}");
    }

    fn discard_card_played(&mut self, seat: Seat, action: &Action) {
        log::info!("{seat} played from discard: {action:?}");
    }

    fn hand_card_discarded(&mut self, seat: Seat, action: &Action) {
        log::info!("{seat} discarded: {action:?}");
    }

    fn build_pile_cleared(&mut self, build_pile: usize) {
        log::info!("build pile {build_pile} cleared");
    }

    fn draw_pile_recreated(&mut self) {
        log::info!("draw pile recreated from completed build piles");
    }

    fn game_ended(&mut self, winner: Seat) {
        log::info!("game over, {winner} wins");
    }
}

/// Event captured by [`EventRecorder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    TurnStarted(Seat),
    TurnEnded(Seat),
    CardsDealt {
        seat: Seat,
        cards: Vec<Card>,
        slots: Vec<usize>,
    },
    HandCardPlayed(Seat, Action),
    StockCardPlayed(Seat, Action),
    DiscardCardPlayed(Seat, Action),
    HandCardDiscarded(Seat, Action),
    BuildPileCleared(usize),
    DrawPileRecreated,
    GameEnded(Seat),
}

/// Records events in order of emission.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Vec<GameEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventRecorder {
    fn game_started(&mut self) {
        self.events.push(GameEvent::GameStarted);
    }

    fn turn_started(&mut self, turn: &Turn) -> Option<Duration> {
        self.events.push(GameEvent::TurnStarted(turn.seat()));
        None
    }

    fn turn_ended(&mut self, turn: &Turn) {
        self.events.push(GameEvent::TurnEnded(turn.seat()));
    }

    fn cards_dealt(&mut self, seat: Seat, cards: &[Card], slots: &[usize]) {
        self.events.push(GameEvent::CardsDealt {
            seat,
            cards: cards.to_vec(),
            slots: slots.to_vec(),
        });
    }

    fn hand_card_played(&mut self, seat: Seat, action: &Action) {
        self.events.push(GameEvent::HandCardPlayed(seat, *action));
    }

    fn stock_card_played(&mut self, seat: Seat, action: &Action) {
        self.events.push(GameEvent::StockCardPlayed(seat, *action));
    }

    fn discard_card_played(&mut self, seat: Seat, action: &Action) {
        self.events.push(GameEvent::DiscardCardPlayed(seat, *action));
    }

    fn hand_card_discarded(&mut self, seat: Seat, action: &Action) {
        self.events.push(GameEvent::HandCardDiscarded(seat, *action));
    }

    fn build_pile_cleared(&mut self, build_pile: usize) {
        self.events.push(GameEvent::BuildPileCleared(build_pile));
    }

    fn draw_pile_recreated(&mut self) {
        self.events.push(GameEvent::DrawPileRecreated);
    }

    fn game_ended(&mut self, winner: Seat) {
        self.events.push(GameEvent::GameEnded(winner));
    }
}
