//! Legal action enumeration.
//!
//! With a decision pending, the legal actions are exactly the head
//! decision's options, in their stored order. Otherwise the active player
//! may, for every available card in slot order:
//! - build it, if affordable
//! - discard it
//! - use it for each unbuilt wonder they can afford, while wonders remain

use super::transitions::construction_cost;
use crate::core::action::Action;
use crate::core::state::{GameState, Phase};

/// Every action legal in `state`. Empty exactly when the game is over.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    match state.phase() {
        Phase::Terminal(_) => Vec::new(),
        Phase::AwaitingDecision => state
            .pending_decision()
            .map(|decision| decision.options.iter().cloned().collect())
            .unwrap_or_default(),
        Phase::AwaitingAction => turn_actions(state),
    }
}

fn turn_actions(state: &GameState) -> Vec<Action> {
    let player = state.active_player();
    let city = state.city(player);
    let wonders_open = state.wonders_built() < state.config().max_wonders;
    let affordable: Vec<_> = city
        .unbuilt_wonders()
        .iter()
        .copied()
        .filter(|w| wonders_open && construction_cost(state, player, w.definition()) <= city.coins())
        .collect();

    let mut actions = Vec::new();
    for card in state.card_structure().available_cards() {
        if construction_cost(state, player, card.definition()) <= city.coins() {
            actions.push(Action::BuildBuilding { player, card });
        }
        actions.push(Action::DiscardCard { player, card });
        actions.extend(
            affordable
                .iter()
                .map(|&wonder| Action::BuildWonder { player, card, wonder }),
        );
    }
    actions
}
