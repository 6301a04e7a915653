//! Rules engine for a two-player (human vs. CPU) Skip-Bo style card game.
//!
//! Players race to empty their stock pile onto four shared build piles that climb from 1 to
//! 12, using a five-card hand and four private discard piles along the way.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod driver;
pub mod error;
pub mod game;
pub mod hand;
pub mod observer;
pub mod pile;
pub mod player;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, Turn};
pub use crate::bot::Bot;
pub use crate::bots::{CpuBot, HumanBot, RandomBot, cpu_next_action};
pub use crate::bots::{create_bot_from_spec, label_for_spec};
pub use crate::card::Card;
pub use crate::driver::{Tick, play_turn, tick};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::hand::Hand;
pub use crate::observer::{EventRecorder, GameEvent, GameObserver, LogObserver, NullObserver};
pub use crate::pile::{AnyCard, Ascending, BuildPile, DiscardPile, Pile, PushRule};
pub use crate::player::{Player, Seat};
pub use crate::state::{BuildPileView, GameSettings, GameStateView, PlayerPublicState, TurnState};
pub use crate::visualize::{VisualOptions, describe_action, render_state};
