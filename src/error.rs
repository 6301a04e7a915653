use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is not active")]
    GameInactive,
    #[error("game has already been started")]
    AlreadyStarted,
    #[error("card {card} cannot be placed on a build pile that needs {required}")]
    InvalidBuildMove { card: Card, required: u8 },
    #[error("pile is empty")]
    EmptyPile,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of malformed actions, rejected before any card moves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("discard pile index {0} is out of range")]
    DiscardIndex(usize),
    #[error("build pile index {0} is out of range")]
    BuildPileIndex(usize),
    #[error("hand slot {0} holds no card")]
    EmptyHandSlot(usize),
}
