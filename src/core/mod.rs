//! Core engine types: players, state, actions, errors, RNG, configuration.
//!
//! This module contains the building blocks every other module depends on.
//! The rules that move a `GameState` forward live in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use player::{PlayerMap, PlayerTurn};
pub use rng::{GameRng, GameRngState, RandomSource, RecordingRandom, ReplayRandom};
pub use config::RulesConfig;
pub use error::{EngineError, Result};
pub use action::{Action, Decision, DecisionOrigin};
pub use state::{GameState, Phase};
