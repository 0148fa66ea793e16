//! Rules engine trait and the standard two-player rules.
//!
//! `RulesEngine` is the seam a search process drives:
//! - What actions are legal
//! - How an action produces the next state
//! - Whether (and how) the game is over
//!
//! The trait never mutates its input. Callers keep the old state, which is
//! what tree search needs to branch from a shared ancestor.

use serde::{Deserialize, Serialize};

use super::{options, transitions};
use crate::core::action::Action;
use crate::core::error::Result;
use crate::core::player::PlayerTurn;
use crate::core::rng::RandomSource;
use crate::core::state::GameState;

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinCondition {
    /// The pawn reached the opponent's capital.
    MilitarySupremacy,
    /// Enough distinct science symbols.
    ScienceSupremacy,
    /// Most victory points after the third age.
    Civilian,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner {
        player: PlayerTurn,
        condition: WinCondition,
    },
    /// Equal points and equal civilian points.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerTurn) -> bool {
        matches!(self, GameResult::Winner { player: p, .. } if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerTurn> {
        match self {
            GameResult::Winner { player, .. } => Some(*player),
            GameResult::Draw => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty exactly when the game is over
/// - `apply_action`: deterministic given the random source's output
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Actions the acting player may submit, in stable order.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action, returning the successor state.
    ///
    /// On error the input state is untouched.
    fn apply_action(
        &self,
        state: &GameState,
        action: &Action,
        rng: &mut dyn RandomSource,
    ) -> Result<GameState>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Play uniformly random legal actions until the game ends.
    ///
    /// Action choices and card draws come from the same source, so a
    /// recorded source replays the whole playout.
    fn random_playout(&self, state: &GameState, rng: &mut dyn RandomSource) -> Result<GameState> {
        let mut state = state.clone();
        loop {
            let actions = self.legal_actions(&state);
            if actions.is_empty() {
                return Ok(state);
            }
            let choice = rng.next_index(actions.len())?;
            state = self.apply_action(&state, &actions[choice], rng)?;
        }
    }
}

/// The standard rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DuelRules;

impl RulesEngine for DuelRules {
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        options::legal_actions(state)
    }

    fn apply_action(
        &self,
        state: &GameState,
        action: &Action,
        rng: &mut dyn RandomSource,
    ) -> Result<GameState> {
        transitions::apply_action(state, action, rng)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result().cloned()
    }
}
