use skeep::card::{DECK_SIZE, HAND_SIZE};
use rand::SeedableRng;
use rand::rngs::StdRng;

use skeep::{
    Action, Card, CpuBot, EventRecorder, Game, GameBuilder, GameConfig, GameError, GameEvent,
    InvalidAction, LogObserver, Seat, Tick, TurnState, play_turn,
};

/// Deck with a fixed draw order and fixed stocks, all listed top card first.
/// Both stocks must have the same length, which becomes the stock size.
fn stacked_deck(draw: &[Card], human_stock: &[Card], cpu_stock: &[Card]) -> Vec<Card> {
    assert_eq!(human_stock.len(), cpu_stock.len());
    let mut deck: Vec<Card> = draw.iter().rev().copied().collect();
    let mut dealt = Vec::with_capacity(human_stock.len() * 2);
    for (human, cpu) in human_stock.iter().rev().zip(cpu_stock.iter().rev()) {
        dealt.push(*human);
        dealt.push(*cpu);
    }
    deck.extend(dealt.into_iter().rev());
    deck
}

fn numbers(values: &[u8]) -> Vec<Card> {
    values.iter().map(|value| Card::Number(*value)).collect()
}

fn recorded_game(
    draw: &[Card],
    human_stock: &[Card],
    cpu_stock: &[Card],
) -> Result<skeep::Game<EventRecorder>, GameError> {
    let deck = stacked_deck(draw, human_stock, cpu_stock);
    let mut game = GameBuilder::new()
        .with_stock_size(human_stock.len())
        .with_deck(deck)
        .build_with_observer(EventRecorder::new())?;
    game.start()?;
    Ok(game)
}

#[test]
fn construction_deals_stocks_but_stays_inactive() -> Result<(), GameError> {
    let mut game = GameBuilder::new().with_seed(1).build()?;
    assert!(!game.is_active());
    assert!(game.current_turn().is_none());
    assert_eq!(game.human_player().stock().len(), 30);
    assert_eq!(game.cpu_player().stock().len(), 30);
    assert_eq!(game.draw_pile().len(), DECK_SIZE - 60);
    assert_eq!(game.card_count(), DECK_SIZE);
    assert_eq!(game.play_stock(0), Err(GameError::GameInactive));

    game.start()?;
    assert!(game.is_active());
    assert_eq!(game.turn_state(), TurnState::HumanTurn);
    assert_eq!(game.current_seat(), Some(Seat::Human));
    assert_eq!(game.human_player().hand().card_count(), HAND_SIZE);
    assert_eq!(game.cpu_player().hand().card_count(), 0);
    assert_eq!(game.draw_pile().len(), DECK_SIZE - 60 - HAND_SIZE);
    assert_eq!(game.card_count(), DECK_SIZE);
    assert_eq!(game.start(), Err(GameError::AlreadyStarted));
    Ok(())
}

#[test]
fn short_game_deals_ten_stock_cards() -> Result<(), GameError> {
    let game = Game::new(GameConfig {
        short_game: true,
        seed: Some(2),
        stock_size: None,
    })?;
    assert_eq!(game.settings().stock_size, 10);
    assert_eq!(game.human_player().stock().len(), 10);
    assert_eq!(game.cpu_player().stock().len(), 10);
    assert_eq!(game.draw_pile().len(), DECK_SIZE - 20);
    Ok(())
}

#[test]
fn zero_stock_size_is_rejected() {
    let result = GameBuilder::new().with_stock_size(0).build();
    assert!(matches!(result, Err(GameError::InvalidConfiguration(_))));
}

#[test]
fn rejected_play_changes_nothing() -> Result<(), GameError> {
    let mut game = recorded_game(
        &numbers(&[3, 3, 3, 3, 3]),
        &numbers(&[1, 5]),
        &numbers(&[12, 12]),
    )?;
    assert_eq!(
        game.play_hand(0, 0),
        Err(GameError::InvalidBuildMove {
            card: Card::Number(3),
            required: 1
        })
    );
    assert!(game.build_piles()[0].is_empty());
    assert_eq!(game.human_player().hand().card(0), Some(Card::Number(3)));

    game.play_stock(0)?;
    game.observer_mut().take();
    assert!(game.play_hand(0, 0).is_err());
    assert_eq!(game.build_piles()[0].cards(), &[Card::Number(1)]);
    assert_eq!(game.human_player().hand().card_count(), HAND_SIZE);
    assert_eq!(
        game.current_turn().map(|turn| turn.actions().to_vec()),
        Some(vec![Action::PlayStock { build_pile: 0 }])
    );
    assert!(game.observer().events().is_empty());
    Ok(())
}

#[test]
fn malformed_actions_are_rejected() -> Result<(), GameError> {
    let mut game = GameBuilder::new().with_seed(9).build()?;
    game.start()?;
    assert_eq!(
        game.play_hand(4, 0),
        Err(GameError::from(InvalidAction::BuildPileIndex(4)))
    );
    assert_eq!(
        game.play_hand(0, HAND_SIZE),
        Err(GameError::from(InvalidAction::HandIndex(HAND_SIZE)))
    );
    assert_eq!(game.discard(4, 0), Err(GameError::from(InvalidAction::DiscardIndex(4))));
    assert_eq!(
        game.play_discard(0, 7),
        Err(GameError::from(InvalidAction::DiscardIndex(7)))
    );
    assert_eq!(game.play_discard(0, 0), Err(GameError::EmptyPile));
    assert_eq!(game.card_count(), DECK_SIZE);
    assert_eq!(game.turns().len(), 1);
    Ok(())
}

#[test]
fn wild_takes_its_position_on_the_build_pile() -> Result<(), GameError> {
    let mut game = recorded_game(
        &[
            Card::Number(1),
            Card::Wild,
            Card::Number(3),
            Card::Number(9),
            Card::Number(9),
        ],
        &numbers(&[12]),
        &numbers(&[12]),
    )?;
    game.play_hand(0, 0)?;
    game.play_hand(0, 1)?;
    assert_eq!(game.build_piles()[0].peek_top(), Ok(Card::Number(2)));
    game.play_hand(0, 2)?;
    assert_eq!(game.build_piles()[0].cards(), &numbers(&[1, 2, 3])[..]);
    assert_eq!(game.build_piles()[0].next_value(), 4);
    Ok(())
}

#[test]
fn emptying_the_hand_deals_again_without_ending_the_turn() -> Result<(), GameError> {
    let mut game = recorded_game(
        &numbers(&[1, 2, 3, 4, 5, 9, 9, 9, 9, 9]),
        &numbers(&[12]),
        &numbers(&[12]),
    )?;
    assert_eq!(
        game.observer_mut().take(),
        vec![
            GameEvent::GameStarted,
            GameEvent::CardsDealt {
                seat: Seat::Human,
                cards: numbers(&[1, 2, 3, 4, 5]),
                slots: vec![0, 1, 2, 3, 4],
            },
            GameEvent::TurnStarted(Seat::Human),
        ]
    );

    for slot in 0..HAND_SIZE {
        game.play_hand(0, slot)?;
    }

    let events = game.observer_mut().take();
    assert_eq!(
        events.last(),
        Some(&GameEvent::CardsDealt {
            seat: Seat::Human,
            cards: numbers(&[9, 9, 9, 9, 9]),
            slots: vec![0, 1, 2, 3, 4],
        })
    );
    assert!(!events.iter().any(|event| matches!(event, GameEvent::TurnEnded(_))));
    assert_eq!(game.turn_state(), TurnState::HumanTurn);
    assert_eq!(game.turns().len(), 1);
    assert_eq!(game.human_player().hand().card_count(), HAND_SIZE);
    assert!(game.draw_pile().is_empty());
    assert_eq!(game.build_piles()[0].len(), 5);
    Ok(())
}

#[test]
fn completed_pile_recycles_into_the_next_draw_pile() -> Result<(), GameError> {
    let mut game = recorded_game(
        &[
            Card::Number(1),
            Card::Wild,
            Card::Number(3),
            Card::Number(4),
            Card::Number(5),
            Card::Number(9),
        ],
        &numbers(&[6, 7, 8, 9, 10, 11, 12, 12]),
        &numbers(&[12; 8]),
    )?;
    let total = game.card_count();
    assert_eq!(total, 22);

    for slot in 0..HAND_SIZE {
        game.play_hand(0, slot)?;
    }
    assert_eq!(game.human_player().hand().card(0), Some(Card::Number(9)));
    assert_eq!(game.human_player().hand().card_count(), 1);

    for _ in 0..7 {
        game.play_stock(0)?;
    }
    assert!(game.is_active());
    assert!(game.build_piles()[0].is_empty());
    let mut recycled: Vec<Card> = game.recycle_pile().to_vec();
    recycled.sort_by_key(|card| card.number());
    assert_eq!(recycled, numbers(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]));
    let cleared = game
        .observer()
        .events()
        .iter()
        .filter(|event| **event == GameEvent::BuildPileCleared(0))
        .count();
    assert_eq!(cleared, 1);
    assert_eq!(game.card_count(), total);

    game.observer_mut().take();
    game.discard(0, 0)?;
    assert_eq!(
        game.observer_mut().take(),
        vec![
            GameEvent::HandCardDiscarded(
                Seat::Human,
                Action::Discard {
                    discard_pile: 0,
                    hand_slot: 0
                }
            ),
            GameEvent::TurnEnded(Seat::Human),
            GameEvent::DrawPileRecreated,
            GameEvent::CardsDealt {
                seat: Seat::Cpu,
                cards: game.cpu_player().hand().cards().map(|(_, card)| card).collect(),
                slots: vec![0, 1, 2, 3, 4],
            },
            GameEvent::TurnStarted(Seat::Cpu),
        ]
    );
    assert_eq!(game.draw_pile().len(), 7);
    assert!(game.recycle_pile().is_empty());
    assert_eq!(game.card_count(), total);
    Ok(())
}

#[test]
fn discard_alternates_turns_and_logs_them() -> Result<(), GameError> {
    let mut game = recorded_game(
        &numbers(&[7, 7, 7, 7, 7, 8, 8, 8, 8, 8, 6, 5]),
        &numbers(&[12]),
        &numbers(&[12]),
    )?;
    game.discard(2, 4)?;
    assert_eq!(game.turn_state(), TurnState::CpuTurn);
    assert_eq!(game.human_player().discard_piles()[2].cards(), &[Card::Number(7)]);
    assert_eq!(game.cpu_player().hand().card_count(), HAND_SIZE);

    game.discard(0, 1)?;
    assert_eq!(game.turn_state(), TurnState::HumanTurn);
    assert_eq!(game.human_player().hand().card(4), Some(Card::Number(6)));

    game.discard(1, 0)?;
    let seats: Vec<Seat> = game.turns().iter().map(|turn| turn.seat()).collect();
    assert_eq!(seats, vec![Seat::Human, Seat::Cpu, Seat::Human, Seat::Cpu]);
    assert_eq!(
        game.turns()[1].actions(),
        &[Action::Discard {
            discard_pile: 0,
            hand_slot: 1
        }]
    );
    Ok(())
}

#[test]
fn discard_pile_top_can_be_played() -> Result<(), GameError> {
    let mut game = recorded_game(
        &numbers(&[1, 7, 7, 7, 7, 8, 8, 8, 8, 8, 6]),
        &numbers(&[12]),
        &numbers(&[12]),
    )?;
    game.discard(0, 0)?;
    game.discard(0, 0)?;
    game.play_discard(0, 0)?;
    assert_eq!(game.build_piles()[0].cards(), &[Card::Number(1)]);
    assert!(game.human_player().discard_piles()[0].is_empty());
    assert_eq!(game.play_discard(0, 0), Err(GameError::EmptyPile));
    assert!(game.observer().events().contains(&GameEvent::DiscardCardPlayed(
        Seat::Human,
        Action::PlayDiscard {
            build_pile: 0,
            discard_pile: 0
        }
    )));
    Ok(())
}

#[test]
fn emptying_the_stock_wins_and_freezes_the_game() -> Result<(), GameError> {
    let mut game = recorded_game(
        &numbers(&[5, 5, 5, 5, 5, 6, 6, 6, 6, 6]),
        &numbers(&[4]),
        &numbers(&[1]),
    )?;
    game.discard(0, 0)?;
    game.play_stock(0)?;

    assert!(!game.is_active());
    assert_eq!(game.winner(), Some(Seat::Cpu));
    assert_eq!(game.turn_state(), TurnState::Ended);
    assert_eq!(game.current_seat(), None);
    assert!(game.legal_actions().is_empty());
    assert_eq!(
        game.observer().events().last(),
        Some(&GameEvent::GameEnded(Seat::Cpu))
    );
    assert_eq!(game.discard(0, 0), Err(GameError::GameInactive));
    assert_eq!(game.play_hand(0, 0), Err(GameError::GameInactive));
    assert_eq!(game.winner(), Some(Seat::Cpu));
    assert_eq!(game.start(), Err(GameError::AlreadyStarted));
    Ok(())
}

#[test]
fn dealing_stops_quietly_when_cards_run_out() -> Result<(), GameError> {
    let mut game = recorded_game(&numbers(&[1, 2]), &numbers(&[12]), &numbers(&[12]))?;
    assert_eq!(game.human_player().hand().empty_slots(), vec![2, 3, 4]);
    game.discard(0, 1)?;
    assert!(game.cpu_player().hand().is_empty());
    assert!(game.observer().events().contains(&GameEvent::CardsDealt {
        seat: Seat::Cpu,
        cards: Vec::new(),
        slots: Vec::new(),
    }));
    assert_eq!(game.discard(0, 0), Err(GameError::from(InvalidAction::EmptyHandSlot(0))));
    Ok(())
}

#[test]
fn legal_actions_cover_plays_and_discards() -> Result<(), GameError> {
    let game = recorded_game(
        &[
            Card::Number(1),
            Card::Wild,
            Card::Number(7),
            Card::Number(8),
            Card::Number(9),
        ],
        &numbers(&[2]),
        &numbers(&[12]),
    )?;
    let actions = game.legal_actions();
    for build_pile in 0..4 {
        assert!(actions.contains(&Action::PlayHand {
            build_pile,
            hand_slot: 0
        }));
        assert!(actions.contains(&Action::PlayHand {
            build_pile,
            hand_slot: 1
        }));
    }
    assert!(!actions.iter().any(|action| matches!(action, Action::PlayStock { .. })));
    assert!(!actions.contains(&Action::PlayHand {
        build_pile: 0,
        hand_slot: 2
    }));
    let discards = actions.iter().filter(|action| action.ends_turn()).count();
    assert_eq!(discards, 4 * HAND_SIZE);
    assert_eq!(actions.len(), 8 + 4 * HAND_SIZE);
    Ok(())
}

#[test]
fn cpu_turn_runs_until_its_discard() -> Result<(), GameError> {
    let mut config = GameConfig::new(true);
    config.seed = Some(21);
    let mut game = Game::with_observer(config, LogObserver)?;
    game.start()?;
    let mut cpu = CpuBot::new(StdRng::seed_from_u64(4));

    let first = play_turn(&mut game, &mut cpu, 200)?;
    if first == Tick::GameEnded {
        assert_eq!(game.winner(), Some(Seat::Human));
        return Ok(());
    }
    assert_eq!(first, Tick::TurnEnded);
    assert_eq!(game.turns().len(), 2);
    let human_turn = &game.turns()[0];
    assert_eq!(human_turn.seat(), Seat::Human);
    assert!(human_turn.actions().last().is_some_and(Action::ends_turn));
    assert!(human_turn.actions()[..human_turn.actions().len() - 1]
        .iter()
        .all(|action| action.build_pile().is_some()));
    assert_eq!(game.current_seat(), Some(Seat::Cpu));
    Ok(())
}
