//! Game rules: setup, legal actions, transitions and scoring.
//!
//! `DuelRules` implements the `RulesEngine` trait on top of free functions:
//! - `setup`: age decks, structures and the initial state
//! - `options`: legal action enumeration
//! - `transitions`: the action pipeline and turn flow
//! - `scoring`: end-of-game victory points
//!
//! Everything here is a pure function of its inputs plus the supplied
//! random source.

pub mod engine;
pub mod options;
pub mod scoring;
pub mod setup;
pub mod transitions;

pub use engine::{DuelRules, GameResult, RulesEngine, WinCondition};
pub use options::legal_actions;
pub use scoring::{civilian_result, score, ScoreSheet};
pub use setup::{age_deck, age_structure, new_game};
pub use transitions::{apply_action, construction_cost};
