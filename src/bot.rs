use crate::action::Action;
use crate::state::GameStateView;

/// Anything that can choose moves for a seat: the CPU engine, a random player, a person at
/// a terminal.
pub trait Bot {
    /// Next action for `state.self_seat`, or `None` when the bot has nothing to submit.
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Option<Action>;
}
