//! # duel-engine
//!
//! A rules engine for a two-player card-drafting game, built for search
//! rollouts.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `apply_action` takes a state and returns a new
//!    one. Nothing is mutated in place, and a failed action leaves the input
//!    untouched.
//!
//! 2. **Explicit Randomness**: every draw comes from a caller-supplied
//!    `RandomSource`. Recording the indices drawn makes any playout exactly
//!    replayable.
//!
//! 3. **Closed Action Set**: actions are one enum, dispatched by exhaustive
//!    match.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im`, so many
//!   rollouts can branch from one ancestor on different threads.
//!
//! - **Decision Queue**: compound turns (a progress token after a science
//!   pair, a starting player after an age) are queued decisions; the
//!   explicit `Phase` says whether a fresh turn or a decision comes next.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, errors, RNG, configuration
//! - `cards`: card definitions, the constant catalog, decks
//! - `board`: dependency graph, age topologies, card structure, military track
//! - `city`: per-player holdings and resource trading
//! - `rules`: setup, legal actions, transitions, scoring, `RulesEngine`
//! - `persistence`: save and resume

pub mod core;
pub mod cards;
pub mod board;
pub mod city;
pub mod rules;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{
    Action, Decision, DecisionOrigin, EngineError, GameRng, GameRngState, GameState, Phase,
    PlayerMap, PlayerTurn, RandomSource, RecordingRandom, ReplayRandom, Result, RulesConfig,
};

pub use crate::cards::{Age, CardDefinition, CardId, Deck};

pub use crate::board::{CardSlot, CardStructure, Graph, MilitaryBoard, Topology};

pub use crate::city::City;

pub use crate::rules::{
    apply_action, legal_actions, new_game, DuelRules, GameResult, RulesEngine, ScoreSheet,
    WinCondition,
};
