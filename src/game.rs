use std::array::from_fn;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::{Action, Turn};
use crate::card::{BUILD_PILE_COUNT, Card, DISCARD_PILE_COUNT, HAND_SIZE, full_deck};
use crate::error::{GameError, InvalidAction};
use crate::observer::{GameObserver, NullObserver};
use crate::pile::{BuildPile, Pile};
use crate::player::{Player, Seat};
use crate::state::{BuildPileView, GameSettings, GameStateView, PlayerPublicState, TurnState};

const HUMAN_NAME: &str = "1UP";
const CPU_NAME: &str = "CPU";

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameConfig {
    pub short_game: bool,
    /// Seed for every shuffle; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub stock_size: Option<usize>,
}

impl GameConfig {
    pub fn new(short_game: bool) -> Self {
        Self {
            short_game,
            seed: None,
            stock_size: None,
        }
    }

    pub fn settings(&self) -> Result<GameSettings, GameError> {
        let mut settings = GameSettings::new(self.short_game);
        if let Some(custom_stock) = self.stock_size {
            if custom_stock == 0 {
                return Err(GameError::InvalidConfiguration("stock size must be positive"));
            }
            settings.stock_size = custom_stock;
        }
        Ok(settings)
    }
}

/// Builder that enables deterministic deck injection for testing.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal 10 stock cards per player instead of 30.
    pub fn short_game(mut self, short_game: bool) -> Self {
        self.config.short_game = short_game;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use `deck` as-is instead of a shuffled full deck. The last element is the top card.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Override the stock size derived from `short_game`.
    pub fn with_stock_size(mut self, stock_size: usize) -> Self {
        self.config.stock_size = Some(stock_size);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        self.build_with_observer(NullObserver)
    }

    pub fn build_with_observer<O: GameObserver>(self, observer: O) -> Result<Game<O>, GameError> {
        Game::from_parts(self.config, self.deck, observer)
    }
}

/// Core engine: owns every pile, both players and the turn log.
///
/// A game is constructed inactive with both stocks dealt; [`Game::start`] opens the first
/// (human) turn. Actions always apply to the player of the current turn.
pub struct Game<O = NullObserver> {
    settings: GameSettings,
    observer: O,
    rng: StdRng,
    draw_pile: Pile,
    recycle_pile: Vec<Card>,
    build_piles: [BuildPile; BUILD_PILE_COUNT],
    human: Player,
    cpu: Player,
    turns: Vec<Turn>,
    turn_state: TurnState,
    is_active: bool,
    winner: Option<Seat>,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }
}

impl<O: GameObserver> Game<O> {
    pub fn with_observer(config: GameConfig, observer: O) -> Result<Self, GameError> {
        Self::from_parts(config, None, observer)
    }

    fn from_parts(
        config: GameConfig,
        deck: Option<Vec<Card>>,
        observer: O,
    ) -> Result<Self, GameError> {
        let settings = config.settings()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut draw_pile: Pile = match deck {
            Some(deck) => Pile::from_cards(deck),
            None => {
                let mut pile: Pile = Pile::from_cards(full_deck());
                pile.shuffle(&mut rng);
                pile
            }
        };

        if draw_pile.len() < settings.stock_size * 2 {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal stocks",
            ));
        }

        let mut human = Player::new(HUMAN_NAME, Seat::Human);
        let mut cpu = Player::new(CPU_NAME, Seat::Cpu);
        for _ in 0..settings.stock_size {
            human.stock.push_card(draw_pile.pop_top_card()?)?;
            cpu.stock.push_card(draw_pile.pop_top_card()?)?;
        }
        log::debug!(
            "dealt {} stock cards per player, {} left to draw",
            settings.stock_size,
            draw_pile.len()
        );

        Ok(Self {
            settings,
            observer,
            rng,
            draw_pile,
            recycle_pile: Vec::new(),
            build_piles: from_fn(|_| BuildPile::new()),
            human,
            cpu,
            turns: Vec::new(),
            turn_state: TurnState::HumanTurn,
            is_active: false,
            winner: None,
        })
    }

    /// Activates the game and opens the human player's first turn.
    pub fn start(&mut self) -> Result<(), GameError> {
        if !self.turns.is_empty() || self.winner.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        self.is_active = true;
        log::debug!("game started");
        self.observer.game_started();
        self.begin_turn(Seat::Human);
        Ok(())
    }

    pub fn play_hand(&mut self, build_pile: usize, hand_slot: usize) -> Result<(), GameError> {
        self.apply_action(Action::PlayHand {
            build_pile,
            hand_slot,
        })
    }

    pub fn play_stock(&mut self, build_pile: usize) -> Result<(), GameError> {
        self.apply_action(Action::PlayStock { build_pile })
    }

    pub fn play_discard(&mut self, build_pile: usize, discard_pile: usize) -> Result<(), GameError> {
        self.apply_action(Action::PlayDiscard {
            build_pile,
            discard_pile,
        })
    }

    pub fn discard(&mut self, discard_pile: usize, hand_slot: usize) -> Result<(), GameError> {
        self.apply_action(Action::Discard {
            discard_pile,
            hand_slot,
        })
    }

    /// Validates and applies `action` for the player of the current turn.
    ///
    /// On error nothing has changed. The caller is trusted to submit actions only for the
    /// seat whose turn it is.
    pub fn apply_action(&mut self, action: Action) -> Result<(), GameError> {
        if !self.is_active {
            return Err(GameError::GameInactive);
        }
        let seat = self.turn_state.seat().ok_or(GameError::GameInactive)?;
        log::trace!("{seat} applying {action:?}");

        match action {
            Action::PlayHand {
                build_pile,
                hand_slot,
            } => self.play_hand_card(seat, action, build_pile, hand_slot),
            Action::PlayStock { build_pile } => self.play_stock_card(seat, action, build_pile),
            Action::PlayDiscard {
                build_pile,
                discard_pile,
            } => self.play_discard_card(seat, action, build_pile, discard_pile),
            Action::Discard {
                discard_pile,
                hand_slot,
            } => self.discard_hand_card(seat, action, discard_pile, hand_slot),
        }
    }

    /// Every action that would currently succeed for the acting player.
    pub fn legal_actions(&self) -> Vec<Action> {
        let Some(seat) = self.current_seat() else {
            return Vec::new();
        };
        let player = self.player(seat);
        let mut actions = Vec::new();

        for (hand_slot, card) in player.hand.cards() {
            for (build_pile, pile) in self.build_piles.iter().enumerate() {
                if pile.accepts(&card) {
                    actions.push(Action::PlayHand {
                        build_pile,
                        hand_slot,
                    });
                }
            }
        }

        if let Some(card) = player.stock_top() {
            for (build_pile, pile) in self.build_piles.iter().enumerate() {
                if pile.accepts(&card) {
                    actions.push(Action::PlayStock { build_pile });
                }
            }
        }

        for discard_pile in 0..DISCARD_PILE_COUNT {
            if let Some(card) = player.discard_top(discard_pile) {
                for (build_pile, pile) in self.build_piles.iter().enumerate() {
                    if pile.accepts(&card) {
                        actions.push(Action::PlayDiscard {
                            build_pile,
                            discard_pile,
                        });
                    }
                }
            }
        }

        for discard_pile in 0..DISCARD_PILE_COUNT {
            for (hand_slot, _) in player.hand.cards() {
                actions.push(Action::Discard {
                    discard_pile,
                    hand_slot,
                });
            }
        }

        actions
    }

    pub fn state_view(&self, perspective: Seat) -> GameStateView {
        let build_piles = from_fn(|idx| {
            let pile = &self.build_piles[idx];
            BuildPileView {
                cards: pile.cards().to_vec(),
                next_value: pile.next_value(),
            }
        });
        let current = self.current_seat();
        let players = [&self.human, &self.cpu]
            .into_iter()
            .map(|player| PlayerPublicState {
                seat: player.seat(),
                name: player.name().to_string(),
                stock_count: player.stock.len(),
                stock_top: player.stock_top(),
                discard_piles: from_fn(|idx| player.discard_piles[idx].cards().to_vec()),
                hand_size: player.hand.card_count(),
                is_current: current == Some(player.seat()),
                has_won: self.winner == Some(player.seat()),
            })
            .collect();

        GameStateView {
            settings: self.settings,
            turn_state: self.turn_state,
            is_active: self.is_active,
            winner: self.winner,
            self_seat: perspective,
            draw_pile_count: self.draw_pile.len(),
            recycle_pile_count: self.recycle_pile.len(),
            build_piles,
            players,
            hand: *self.player(perspective).hand.slots(),
        }
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    /// Seat allowed to act right now; `None` before `start` and after the game ends.
    pub fn current_seat(&self) -> Option<Seat> {
        if self.is_active {
            self.turn_state.seat()
        } else {
            None
        }
    }

    pub fn current_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Every turn so far, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn build_piles(&self) -> &[BuildPile; BUILD_PILE_COUNT] {
        &self.build_piles
    }

    pub fn draw_pile(&self) -> &Pile {
        &self.draw_pile
    }

    /// Cards from completed build piles waiting to become the next draw pile.
    pub fn recycle_pile(&self) -> &[Card] {
        &self.recycle_pile
    }

    pub fn human_player(&self) -> &Player {
        &self.human
    }

    pub fn cpu_player(&self) -> &Player {
        &self.cpu
    }

    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Cpu => &self.cpu,
        }
    }

    /// Total cards across every location; constant for the lifetime of a game.
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.recycle_pile.len()
            + self.build_piles.iter().map(BuildPile::len).sum::<usize>()
            + self.human.card_count()
            + self.cpu.card_count()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Cpu => &mut self.cpu,
        }
    }

    fn play_hand_card(
        &mut self,
        seat: Seat,
        action: Action,
        build_pile: usize,
        hand_slot: usize,
    ) -> Result<(), GameError> {
        check_build_index(build_pile)?;
        if hand_slot >= HAND_SIZE {
            return Err(InvalidAction::HandIndex(hand_slot).into());
        }
        let card = self
            .player(seat)
            .hand
            .card(hand_slot)
            .ok_or(InvalidAction::EmptyHandSlot(hand_slot))?;
        self.build_piles[build_pile].push_card(card)?;
        self.player_mut(seat).hand.remove_card(hand_slot);

        self.record(action);
        self.observer.hand_card_played(seat, &action);
        self.clear_if_complete(build_pile);
        if self.player(seat).hand.is_empty() {
            log::debug!("{seat} emptied their hand, dealing again");
            self.deal(seat);
        }
        Ok(())
    }

    fn play_stock_card(
        &mut self,
        seat: Seat,
        action: Action,
        build_pile: usize,
    ) -> Result<(), GameError> {
        check_build_index(build_pile)?;
        let card = self.player(seat).stock.peek_top()?;
        self.build_piles[build_pile].push_card(card)?;
        self.player_mut(seat).stock.pop_top_card()?;

        self.record(action);
        self.observer.stock_card_played(seat, &action);
        self.clear_if_complete(build_pile);
        if self.player(seat).stock.is_empty() {
            self.finish(seat);
        }
        Ok(())
    }

    fn play_discard_card(
        &mut self,
        seat: Seat,
        action: Action,
        build_pile: usize,
        discard_pile: usize,
    ) -> Result<(), GameError> {
        check_build_index(build_pile)?;
        check_discard_index(discard_pile)?;
        let card = self.player(seat).discard_piles[discard_pile].peek_top()?;
        self.build_piles[build_pile].push_card(card)?;
        self.player_mut(seat).discard_piles[discard_pile].pop_top_card()?;

        self.record(action);
        self.observer.discard_card_played(seat, &action);
        self.clear_if_complete(build_pile);
        Ok(())
    }

    fn discard_hand_card(
        &mut self,
        seat: Seat,
        action: Action,
        discard_pile: usize,
        hand_slot: usize,
    ) -> Result<(), GameError> {
        check_discard_index(discard_pile)?;
        if hand_slot >= HAND_SIZE {
            return Err(InvalidAction::HandIndex(hand_slot).into());
        }
        let player = self.player_mut(seat);
        let card = player
            .hand
            .card(hand_slot)
            .ok_or(InvalidAction::EmptyHandSlot(hand_slot))?;
        player.discard_piles[discard_pile].push_card(card)?;
        player.hand.remove_card(hand_slot);

        self.record(action);
        self.observer.hand_card_discarded(seat, &action);
        self.end_turn(seat);
        Ok(())
    }

    fn record(&mut self, action: Action) {
        if let Some(turn) = self.turns.last_mut() {
            turn.add_action(action);
        }
    }

    fn clear_if_complete(&mut self, build_pile: usize) {
        if !self.build_piles[build_pile].is_complete() {
            return;
        }
        let completed = self.build_piles[build_pile].take_cards();
        self.recycle_pile.extend(completed);
        log::debug!(
            "build pile {build_pile} completed, {} cards waiting to recycle",
            self.recycle_pile.len()
        );
        self.observer.build_pile_cleared(build_pile);
    }

    fn finish(&mut self, winner: Seat) {
        self.is_active = false;
        self.winner = Some(winner);
        self.turn_state = TurnState::Ended;
        log::debug!("{winner} emptied their stock pile and wins");
        self.observer.game_ended(winner);
    }

    fn end_turn(&mut self, seat: Seat) {
        if let Some(turn) = self.turns.last() {
            self.observer.turn_ended(turn);
        }
        self.begin_turn(seat.opponent());
    }

    fn begin_turn(&mut self, seat: Seat) {
        self.turns.push(Turn::new(seat));
        self.turn_state = TurnState::for_seat(seat);
        log::debug!("turn {} begins for {seat}", self.turns.len());
        self.deal(seat);
        if let Some(turn) = self.turns.last() {
            // Pacing belongs to the caller.
            let _ = self.observer.turn_started(turn);
        }
    }

    /// Fills empty hand slots in ascending order until the hand is full or no card is left
    /// in either the draw pile or the recycle pile.
    fn deal(&mut self, seat: Seat) {
        let mut cards = Vec::with_capacity(HAND_SIZE);
        let mut slots = Vec::with_capacity(HAND_SIZE);
        for slot in self.player(seat).hand.empty_slots() {
            let Some(card) = self.draw_card() else {
                log::debug!("draw and recycle piles exhausted, {seat} keeps an open slot");
                break;
            };
            self.player_mut(seat).hand.set_card(slot, card);
            cards.push(card);
            slots.push(slot);
        }
        self.observer.cards_dealt(seat, &cards, &slots);
    }

    fn draw_card(&mut self) -> Option<Card> {
        if self.draw_pile.is_empty() && !self.recycle_pile.is_empty() {
            self.recreate_draw_pile();
        }
        self.draw_pile.pop_top_card().ok()
    }

    fn recreate_draw_pile(&mut self) {
        self.draw_pile = Pile::from_cards(std::mem::take(&mut self.recycle_pile));
        self.draw_pile.shuffle(&mut self.rng);
        log::debug!(
            "draw pile recreated from {} completed cards",
            self.draw_pile.len()
        );
        self.observer.draw_pile_recreated();
    }
}

fn check_build_index(index: usize) -> Result<(), GameError> {
    if index >= BUILD_PILE_COUNT {
        return Err(InvalidAction::BuildPileIndex(index).into());
    }
    Ok(())
}

fn check_discard_index(index: usize) -> Result<(), GameError> {
    if index >= DISCARD_PILE_COUNT {
        return Err(InvalidAction::DiscardIndex(index).into());
    }
    Ok(())
}
