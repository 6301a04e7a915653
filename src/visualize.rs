use std::fmt::Write;

use crate::action::Action;
use crate::card::Card;
use crate::state::{GameStateView, TurnState};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_build_sequences: bool,
    pub show_discard_sizes: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_build_sequences: true,
            show_discard_sizes: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match (state.turn_state, state.winner) {
        (TurnState::Ended, Some(winner)) => format!("Finished (winner: {winner})"),
        (_, _) if !state.is_active => String::from("Not started"),
        (TurnState::HumanTurn, _) => String::from("Human to play"),
        (TurnState::CpuTurn, _) => String::from("CPU to play"),
        (TurnState::Ended, None) => String::from("Finished"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Recycle pile: {}",
        state.draw_pile_count, state.recycle_pile_count
    );
    let _ = writeln!(out, "Build piles:");
    for (idx, pile) in state.build_piles.iter().enumerate() {
        let sequence = if options.show_build_sequences && !pile.cards.is_empty() {
            let seq = pile
                .cards
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            format!("[{seq}]")
        } else {
            String::from("[-]")
        };
        let _ = writeln!(out, "  [{idx}] next {}  {}", pile.next_value, sequence);
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let label_you = if player.seat == state.self_seat {
            " (You)"
        } else {
            ""
        };
        let current_tag = if player.is_current { " <- current" } else { "" };
        let stock_top = format_slot(player.stock_top);
        let discard_display = player
            .discard_piles
            .iter()
            .enumerate()
            .map(|(idx, pile)| {
                let top = format_slot(pile.last().copied());
                if options.show_discard_sizes {
                    format!("{idx}:{top} ({})", pile.len())
                } else {
                    format!("{idx}:{top}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(
            out,
            "  {}{} - stock {} (top: {}){}",
            player.name, label_you, player.stock_count, stock_top, current_tag
        );
        let _ = writeln!(out, "    Discards: {discard_display}");
        if player.seat == state.self_seat {
            let hand_display = state
                .hand
                .iter()
                .enumerate()
                .map(|(idx, card)| format!("{idx}:{}", format_slot(*card)))
                .collect::<Vec<_>>()
                .join("  ");
            let _ = writeln!(out, "    Hand: {hand_display}");
        } else {
            let _ = writeln!(out, "    Hand size: {}", player.hand_size);
        }
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    let me = state.self_player();
    let needs = |build_pile: usize| {
        state
            .build_piles
            .get(build_pile)
            .map(|pile| pile.next_value)
            .unwrap_or(0)
    };
    match *action {
        Action::PlayHand {
            build_pile,
            hand_slot,
        } => {
            let card = format_slot(state.hand.get(hand_slot).copied().flatten());
            format!(
                "Play hand[{hand_slot}] {card} to build pile {build_pile} (needs {})",
                needs(build_pile)
            )
        }
        Action::PlayStock { build_pile } => {
            let card = format_slot(me.and_then(|player| player.stock_top));
            format!(
                "Play stock top {card} to build pile {build_pile} (needs {})",
                needs(build_pile)
            )
        }
        Action::PlayDiscard {
            build_pile,
            discard_pile,
        } => {
            let card = format_slot(me.and_then(|player| player.discard_top(discard_pile)));
            format!(
                "Play discard[{discard_pile}] {card} to build pile {build_pile} (needs {})",
                needs(build_pile)
            )
        }
        Action::Discard {
            discard_pile,
            hand_slot,
        } => {
            let card = format_slot(state.hand.get(hand_slot).copied().flatten());
            format!("Discard hand[{hand_slot}] {card} to pile {discard_pile} (ends turn)")
        }
    }
}

fn format_slot(card: Option<Card>) -> String {
    card.map(|card| card.to_string())
        .unwrap_or_else(|| String::from("--"))
}
