//! Save and resume games.
//!
//! A `GameState` is encoded with bincode. Decoding is the exact inverse of
//! encoding, and every decoded state is checked against the structural
//! invariants before it is handed back, so a truncated or hand-edited save
//! fails with an error instead of producing a state the rules cannot play.
//!
//! ```
//! use duel_engine::core::{GameRng, RulesConfig};
//! use duel_engine::persistence;
//! use duel_engine::rules::new_game;
//!
//! let state = new_game(RulesConfig::default(), &mut GameRng::new(5)).unwrap();
//! let bytes = persistence::to_bytes(&state).unwrap();
//! assert_eq!(persistence::from_bytes(&bytes).unwrap(), state);
//! ```

use std::io::{Read, Write};

use tracing::debug;

use crate::core::error::{EngineError, Result};
use crate::core::state::GameState;

fn codec_error(err: bincode::Error) -> EngineError {
    EngineError::Codec(err.to_string())
}

/// Encode a state to bytes.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>> {
    let bytes = bincode::serialize(state).map_err(codec_error)?;
    debug!(len = bytes.len(), "encoded game state");
    Ok(bytes)
}

/// Decode and validate a state.
pub fn from_bytes(bytes: &[u8]) -> Result<GameState> {
    let state: GameState = bincode::deserialize(bytes).map_err(codec_error)?;
    state.check_invariants()?;
    Ok(state)
}

/// Encode a state into a writer.
pub fn to_writer(writer: impl Write, state: &GameState) -> Result<()> {
    bincode::serialize_into(writer, state).map_err(codec_error)
}

/// Decode and validate a state from a reader.
pub fn from_reader(reader: impl Read) -> Result<GameState> {
    let state: GameState = bincode::deserialize_from(reader).map_err(codec_error)?;
    state.check_invariants()?;
    Ok(state)
}
