//! Game state: the immutable root of a game in progress.
//!
//! ## GameState
//!
//! Complete game state:
//! - Rules configuration the game was started with
//! - Card structure of the current age (with its residual deck)
//! - Both cities
//! - Military board
//! - Progress tokens on the board and in the box
//! - Discard pile
//! - Turn order, pending decisions and phase
//!
//! Every transition returns a new `GameState`. All collections are `im`
//! persistent structures, so cloning a state for a rollout is O(1) and two
//! clones never observe each other's changes.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::Decision;
use super::config::RulesConfig;
use super::error::{EngineError, Result};
use super::player::{PlayerMap, PlayerTurn};
use crate::board::{CardStructure, MilitaryBoard, SUPREMACY_DISTANCE};
use crate::cards::{Age, CardId, Deck};
use crate::city::City;
use crate::rules::GameResult;

/// Where the game stands in its turn cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The active player starts a fresh turn.
    AwaitingAction,
    /// The head of the decision queue must be resolved first.
    AwaitingDecision,
    /// The game is over.
    Terminal(GameResult),
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: RulesConfig,
    pub(crate) card_structure: CardStructure,
    pub(crate) cities: PlayerMap<City>,
    pub(crate) military: MilitaryBoard,
    /// Progress tokens on the board, available through science pairs.
    pub(crate) progress_tokens: Vector<CardId>,
    /// Progress tokens left in the box.
    pub(crate) boxed_tokens: Deck,
    pub(crate) discard_pile: Vector<CardId>,
    pub(crate) active_player: PlayerTurn,
    /// Player who starts the next fresh turn once the queue drains.
    pub(crate) next_player: PlayerTurn,
    pub(crate) decisions: Vector<Decision>,
    pub(crate) phase: Phase,
}

impl GameState {
    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn age(&self) -> Age {
        self.card_structure.age()
    }

    #[must_use]
    pub fn card_structure(&self) -> &CardStructure {
        &self.card_structure
    }

    #[must_use]
    pub fn city(&self, player: PlayerTurn) -> &City {
        &self.cities[player]
    }

    #[must_use]
    pub fn military(&self) -> &MilitaryBoard {
        &self.military
    }

    #[must_use]
    pub fn progress_tokens(&self) -> &Vector<CardId> {
        &self.progress_tokens
    }

    #[must_use]
    pub fn boxed_tokens(&self) -> &Deck {
        &self.boxed_tokens
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardId> {
        &self.discard_pile
    }

    /// Player whose fresh turn it is, or who owns the turn a pending
    /// decision interrupted.
    #[must_use]
    pub fn active_player(&self) -> PlayerTurn {
        self.active_player
    }

    #[must_use]
    pub fn next_player(&self) -> PlayerTurn {
        self.next_player
    }

    /// Pending decisions, head first.
    #[must_use]
    pub fn decisions(&self) -> &Vector<Decision> {
        &self.decisions
    }

    #[must_use]
    pub fn pending_decision(&self) -> Option<&Decision> {
        self.decisions.front()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match &self.phase {
            Phase::Terminal(result) => Some(result),
            _ => None,
        }
    }

    /// Player expected to submit the next action, `None` once the game is over.
    #[must_use]
    pub fn acting_player(&self) -> Option<PlayerTurn> {
        match self.phase {
            Phase::AwaitingAction => Some(self.active_player),
            Phase::AwaitingDecision => self.pending_decision().map(|d| d.player),
            Phase::Terminal(_) => None,
        }
    }

    /// Wonders built by both cities.
    #[must_use]
    pub fn wonders_built(&self) -> usize {
        PlayerTurn::ALL
            .iter()
            .map(|&p| self.cities[p].wonders().len())
            .sum()
    }

    // === Validation ===

    /// Check the structural invariants a decoded state must satisfy.
    pub fn check_invariants(&self) -> Result<()> {
        let queue_pending = !self.decisions.is_empty();
        match self.phase {
            Phase::AwaitingAction if queue_pending => {
                return Err(EngineError::CorruptState("decision pending while awaiting an action"));
            }
            Phase::AwaitingDecision if !queue_pending => {
                return Err(EngineError::CorruptState("awaiting a decision with an empty queue"));
            }
            Phase::Terminal(_) if queue_pending => {
                return Err(EngineError::CorruptState("decision pending after the game ended"));
            }
            _ => {}
        }
        for decision in &self.decisions {
            if decision.options.is_empty()
                || decision.options.iter().any(|a| a.player() != decision.player)
            {
                return Err(EngineError::CorruptState("malformed decision"));
            }
        }
        if self.military.pawn_position().abs() > SUPREMACY_DISTANCE {
            return Err(EngineError::CorruptState("pawn beyond the capital"));
        }
        if self.wonders_built() > self.config.max_wonders {
            return Err(EngineError::CorruptState("too many wonders built"));
        }
        self.card_structure.check_invariants()?;
        self.check_unique_cards()
    }

    /// Every card sits in exactly one place: the structure, its residual
    /// deck, a city, the board or box of progress tokens, or the discard pile.
    fn check_unique_cards(&self) -> Result<()> {
        let structure = &self.card_structure;
        let placed = structure.graph().vertices().filter_map(|(_, slot)| slot.card());
        let held = self.cities.iter().flat_map(|(_, city)| {
            city.buildings()
                .iter()
                .chain(city.wonders())
                .chain(city.unbuilt_wonders())
                .chain(city.progress_tokens())
                .copied()
        });
        let all = placed
            .chain(structure.deck().cards())
            .chain(held)
            .chain(self.progress_tokens.iter().copied())
            .chain(self.boxed_tokens.cards())
            .chain(self.discard_pile.iter().copied());

        let mut seen = FxHashSet::default();
        for card in all {
            if !seen.insert(card) {
                return Err(EngineError::CorruptState("card held in two places"));
            }
        }
        Ok(())
    }
}
