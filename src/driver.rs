//! Feeding bot decisions into a game, one action per tick.
//!
//! This is the caller side of the engine: it reads the acting seat's view, asks the bot for
//! an action and submits it. The engine itself never schedules anything.

use crate::bot::Bot;
use crate::error::GameError;
use crate::game::Game;
use crate::observer::GameObserver;

/// What happened after one submitted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Same player acts again.
    Continue,
    /// A discard handed the turn to the opponent.
    TurnEnded,
    /// The game is over.
    GameEnded,
    /// The bot produced no action.
    Stuck,
}

/// Asks `bot` for one action for the current seat and applies it.
pub fn tick<O, B>(game: &mut Game<O>, bot: &mut B) -> Result<Tick, GameError>
where
    O: GameObserver,
    B: Bot + ?Sized,
{
    let seat = game.current_seat().ok_or(GameError::GameInactive)?;
    let turn_number = game.turns().len();
    let view = game.state_view(seat);
    let legal_actions = game.legal_actions();
    let Some(action) = bot.select_action(&view, &legal_actions) else {
        log::debug!("{seat} has no action to submit");
        return Ok(Tick::Stuck);
    };
    game.apply_action(action)?;

    if !game.is_active() {
        Ok(Tick::GameEnded)
    } else if game.turns().len() != turn_number {
        Ok(Tick::TurnEnded)
    } else {
        Ok(Tick::Continue)
    }
}

/// Ticks until the current turn ends, the game ends, the bot is stuck or `max_ticks`
/// actions were applied. Returns the last tick, `Continue` meaning the limit was hit.
pub fn play_turn<O, B>(game: &mut Game<O>, bot: &mut B, max_ticks: usize) -> Result<Tick, GameError>
where
    O: GameObserver,
    B: Bot + ?Sized,
{
    let mut last = Tick::Continue;
    for _ in 0..max_ticks {
        last = tick(game, bot)?;
        if last != Tick::Continue {
            break;
        }
    }
    Ok(last)
}
